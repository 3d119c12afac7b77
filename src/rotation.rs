//! The orientation half of a homogeneous transform.
//!
//! [`HomogeneousTransform`](crate::HomogeneousTransform) does not do any rotation algebra of its
//! own. Instead it leans on a type implementing [`Rotation`], which supplies the handful of
//! operations needed to compose, apply, invert, and (de)serialize orientations to and from
//! rotation matrices. This crate provides implementations for nalgebra's
//! [`UnitQuaternion`](nalgebra::UnitQuaternion) (the default) and
//! [`Rotation3`](nalgebra::Rotation3).

use crate::error::InvalidArgument;
use crate::{Matrix3, Rotation3, UnitQuaternion, Vector3, ORTHONORMALITY_TOLERANCE};
use std::fmt::Debug;

/// An orientation in three-dimensional space.
///
/// Implementors must always represent a proper rotation (ie, a unit quaternion or an orthonormal
/// matrix with determinant `+1`). The trait does not re-validate that on every operation; it is
/// up to the implementing type to maintain it.
pub trait Rotation: Copy + Debug + PartialEq {
    /// The orientation that leaves every vector where it is.
    fn identity() -> Self;

    /// Chains two orientations such that `self.compose(&rhs).rotate_vector(v)` equals
    /// `self.rotate_vector(rhs.rotate_vector(v))`.
    ///
    /// For quaternions this is plain quaternion multiplication, `self * rhs`.
    #[must_use]
    fn compose(&self, rhs: &Self) -> Self;

    /// Rotates `v` by this orientation.
    #[must_use]
    fn rotate_vector(&self, v: &Vector3) -> Vector3;

    /// Returns the orientation that undoes this one.
    #[must_use]
    fn inverse(&self) -> Self;

    /// Returns the equivalent 3x3 rotation matrix.
    #[must_use]
    fn to_matrix(&self) -> Matrix3;

    /// Decodes a 3x3 rotation matrix.
    ///
    /// Fails unless the matrix is orthonormal (see [`check_rotation_matrix`]) and has a positive
    /// determinant.
    fn try_from_matrix(m: &Matrix3) -> Result<Self, InvalidArgument>;

    /// Euclidean norm of the component-wise difference between two orientations.
    ///
    /// Note that for quaternions `q` and `-q` describe the same rotation but are _not_ at
    /// distance zero from one another.
    fn distance(&self, other: &Self) -> f64;
}

/// Checks that `m` is a proper rotation matrix.
///
/// `m` is accepted if the Frobenius norm of `mᵀm − I` is at most [`ORTHONORMALITY_TOLERANCE`]
/// and its determinant is positive.
pub fn check_rotation_matrix(m: &Matrix3) -> Result<(), InvalidArgument> {
    let deviation = (m.transpose() * m - Matrix3::identity()).norm();
    // NaN compares false, so non-finite input lands here as well
    if !(deviation <= ORTHONORMALITY_TOLERANCE) {
        log::debug!("rejecting rotation block that deviates from orthonormal by {deviation:e}");
        return Err(InvalidArgument::NotOrthonormal { deviation });
    }

    let determinant = m.determinant();
    if determinant <= 0. {
        log::debug!("rejecting reflection with determinant {determinant}");
        return Err(InvalidArgument::Reflection { determinant });
    }

    Ok(())
}

impl Rotation for UnitQuaternion {
    fn identity() -> Self {
        UnitQuaternion::identity()
    }

    fn compose(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        self.transform_vector(v)
    }

    fn inverse(&self) -> Self {
        UnitQuaternion::inverse(self)
    }

    fn to_matrix(&self) -> Matrix3 {
        self.to_rotation_matrix().into_inner()
    }

    fn try_from_matrix(m: &Matrix3) -> Result<Self, InvalidArgument> {
        check_rotation_matrix(m)?;
        Ok(UnitQuaternion::from_rotation_matrix(
            &Rotation3::from_matrix_unchecked(*m),
        ))
    }

    fn distance(&self, other: &Self) -> f64 {
        (self.quaternion().coords - other.quaternion().coords).norm()
    }
}

impl Rotation for Rotation3 {
    fn identity() -> Self {
        Rotation3::identity()
    }

    fn compose(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        self.transform_vector(v)
    }

    fn inverse(&self) -> Self {
        Rotation3::inverse(self)
    }

    fn to_matrix(&self) -> Matrix3 {
        *self.matrix()
    }

    fn try_from_matrix(m: &Matrix3) -> Result<Self, InvalidArgument> {
        check_rotation_matrix(m)?;
        Ok(Rotation3::from_matrix_unchecked(*m))
    }

    fn distance(&self, other: &Self) -> f64 {
        (self.matrix() - other.matrix()).norm()
    }
}
