use crate::error::InvalidArgument;
use crate::frame::RelativeTo;
use crate::rotation::Rotation;
use crate::{
    Isometry3, Matrix3, Matrix4, UnitQuaternion, Vector3, Vector4, FINAL_ROW_TOLERANCE,
};
use nalgebra::storage::Storage;
use nalgebra::{Dim, Matrix, Translation3};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Mul;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The pose (ie, orientation and position) of a local reference frame relative to some reference
/// frame, stored as a rotation and a translation.
///
/// For any point `p` given in the local frame, `translation + orientation.rotate_vector(p)` is
/// that same point in the reference frame (see [`HomogeneousTransform::transform`]).
///
/// There are generally three ways to construct a transform:
///
/// 1. directly from an orientation and a translation with [`HomogeneousTransform::new`];
/// 2. relative to another transform with [`HomogeneousTransform::relative_to`];
/// 3. by decoding a [homogeneous matrix] with [`HomogeneousTransform::from_matrix`].
///
/// Transforms can be chained with [`HomogeneousTransform::compose`] (or `*`, which is the same
/// thing) and inverted with [`HomogeneousTransform::inverse`]. Chaining follows the usual matrix
/// convention: `(a * b).to_matrix()` is `a.to_matrix() * b.to_matrix()`.
///
/// ```
/// use homtran::HomogeneousTransform;
/// use nalgebra::{UnitQuaternion, Vector3};
///
/// // a camera mounted 1m up, looking along the world's y-axis
/// let camera = HomogeneousTransform::new(
///     UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2),
///     Vector3::new(0., 0., 1.),
/// );
///
/// // a point 2m in front of the camera
/// let in_world = camera.transform(&Vector3::new(2., 0., 0.));
/// approx::assert_relative_eq!(in_world, Vector3::new(0., 2., 1.), epsilon = 1e-15);
///
/// // and back again
/// let in_camera = camera.inverse().transform(&in_world);
/// approx::assert_relative_eq!(in_camera, Vector3::new(2., 0., 0.), epsilon = 1e-15);
/// ```
///
/// The orientation type defaults to nalgebra's [`UnitQuaternion`](nalgebra::UnitQuaternion), but
/// anything implementing [`Rotation`] works, eg. [`Rotation3`](nalgebra::Rotation3).
///
/// [homogeneous matrix]: https://en.wikipedia.org/wiki/Transformation_matrix#Affine_transformations
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HomogeneousTransform<R = UnitQuaternion> {
    orientation: R,
    translation: Vector3,
}

impl<R: Rotation> Default for HomogeneousTransform<R> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<R: Rotation> HomogeneousTransform<R> {
    /// Constructs a transform directly from an orientation and a translation, both given in the
    /// reference frame.
    #[must_use]
    pub fn new(orientation: R, translation: Vector3) -> Self {
        Self {
            orientation,
            translation,
        }
    }

    /// The transform that maps every point onto itself.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(R::identity(), Vector3::zeros())
    }

    /// Constructs a transform from an orientation and a translation that are both given relative
    /// to `frame`.
    ///
    /// See [`RelativeTo`] for how each choice of frame is interpreted. With
    /// [`RelativeTo::Global`] this is the same as [`HomogeneousTransform::new`].
    #[must_use]
    pub fn relative_to(orientation: R, translation: Vector3, frame: RelativeTo<'_, R>) -> Self {
        Self::new(
            frame.compose_orientation(orientation),
            frame.compose_translation(translation),
        )
    }

    /// Decodes a homogeneous 4x4 matrix.
    ///
    /// The matrix must be laid out as
    ///
    /// ```text
    /// ⎡ r r r tx ⎤
    /// ⎢ r r r ty ⎥
    /// ⎢ r r r tz ⎥
    /// ⎣ 0 0 0 1  ⎦
    /// ```
    ///
    /// where the `r` block is a proper rotation matrix. Both statically and dynamically sized
    /// matrices are accepted; see [`HomogeneousTransform::set_matrix`] for the ways in which
    /// decoding can fail.
    ///
    /// ```
    /// use homtran::{HomogeneousTransform, InvalidArgument};
    /// use nalgebra::{DMatrix, Matrix4};
    ///
    /// let shifted = HomogeneousTransform::<nalgebra::UnitQuaternion<f64>>::from_matrix(
    ///     &Matrix4::new_translation(&nalgebra::Vector3::new(1., 2., 3.)),
    /// )?;
    /// assert_eq!(shifted.translation(), nalgebra::Vector3::new(1., 2., 3.));
    ///
    /// let not_square = HomogeneousTransform::<nalgebra::UnitQuaternion<f64>>::from_matrix(
    ///     &DMatrix::<f64>::identity(3, 4),
    /// );
    /// assert_eq!(not_square, Err(InvalidArgument::Shape { rows: 3, cols: 4 }));
    /// # Ok::<(), InvalidArgument>(())
    /// ```
    pub fn from_matrix<Rows, Cols, S>(
        m: &Matrix<f64, Rows, Cols, S>,
    ) -> Result<Self, InvalidArgument>
    where
        Rows: Dim,
        Cols: Dim,
        S: Storage<f64, Rows, Cols>,
    {
        let mut transform = Self::identity();
        transform.set_matrix(m)?;
        Ok(transform)
    }

    /// Returns this frame's orientation relative to the reference frame.
    #[doc(alias = "quaternion")]
    #[must_use]
    pub fn orientation(&self) -> R {
        self.orientation
    }

    /// Returns the origin of this frame, expressed in the reference frame.
    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.translation
    }

    /// Replaces this frame's orientation with `orientation`, given relative to `frame`.
    ///
    /// The translation is left as-is. To place a frame relative to its own current pose, copy it
    /// first, as `frame` cannot borrow `self`.
    #[doc(alias = "set_quaternion")]
    pub fn set_orientation(&mut self, orientation: R, frame: RelativeTo<'_, R>) {
        self.orientation = frame.compose_orientation(orientation);
    }

    /// Replaces this frame's origin with `translation`, given relative to `frame`.
    ///
    /// The orientation is left as-is, and in particular does not influence how `translation` is
    /// interpreted; only the orientation of `frame` does.
    pub fn set_translation(&mut self, translation: Vector3, frame: RelativeTo<'_, R>) {
        self.translation = frame.compose_translation(translation);
    }

    /// Overwrites this transform with the one described by the homogeneous matrix `m`.
    ///
    /// Fails, leaving `self` untouched, if
    ///
    /// - `m` is not 4x4 ([`InvalidArgument::Shape`]),
    /// - the final row deviates from `[0, 0, 0, 1]` by more than [`FINAL_ROW_TOLERANCE`] in
    ///   Euclidean norm ([`InvalidArgument::FinalRow`]), or
    /// - the upper-left 3x3 block is rejected by [`Rotation::try_from_matrix`].
    pub fn set_matrix<Rows, Cols, S>(
        &mut self,
        m: &Matrix<f64, Rows, Cols, S>,
    ) -> Result<(), InvalidArgument>
    where
        Rows: Dim,
        Cols: Dim,
        S: Storage<f64, Rows, Cols>,
    {
        let (rows, cols) = m.shape();
        if (rows, cols) != (4, 4) {
            log::debug!("rejecting {rows}x{cols} matrix as a homogeneous transform");
            return Err(InvalidArgument::Shape { rows, cols });
        }

        let final_row = Vector4::new(m[(3, 0)], m[(3, 1)], m[(3, 2)], m[(3, 3)]);
        let deviation = (final_row - Vector4::new(0., 0., 0., 1.)).norm();
        if !(deviation <= FINAL_ROW_TOLERANCE) {
            log::debug!("rejecting homogeneous matrix whose final row is off by {deviation:e}");
            return Err(InvalidArgument::FinalRow { deviation });
        }

        let rotation = Matrix3::from_fn(|row, col| m[(row, col)]);
        self.orientation = R::try_from_matrix(&rotation)?;
        self.translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
        Ok(())
    }

    /// Encodes this transform as a homogeneous 4x4 matrix.
    ///
    /// The upper-left 3x3 block is the rotation matrix of [`HomogeneousTransform::orientation`],
    /// the first three rows of the last column are [`HomogeneousTransform::translation`], and
    /// the final row is `[0, 0, 0, 1]`. [`HomogeneousTransform::from_matrix`] reverses this.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&self.orientation.to_matrix());
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }

    /// Maps a point given in this (local) frame into the reference frame.
    #[doc(alias = "apply")]
    #[must_use]
    pub fn transform(&self, v: &Vector3) -> Vector3 {
        self.translation + self.orientation.rotate_vector(v)
    }

    /// Maps a point given in the reference frame into this (local) frame.
    ///
    /// This is equivalent to (but cheaper than) first inverting the transform with
    /// [`HomogeneousTransform::inverse`] and then calling [`HomogeneousTransform::transform`].
    #[doc(alias = "undo")]
    #[must_use]
    pub fn inverse_transform(&self, v: &Vector3) -> Vector3 {
        self.orientation.inverse().rotate_vector(&(v - self.translation))
    }

    /// Returns the transform that maps points from the reference frame into this frame.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let orientation = self.orientation.inverse();
        let translation = orientation.rotate_vector(&-self.translation);
        Self::new(orientation, translation)
    }

    /// Chains two transforms.
    ///
    /// If `rhs` maps its local frame into `self`'s local frame, the result maps `rhs`'s local
    /// frame straight into `self`'s reference frame. That is, `a.compose(&b).transform(v)` equals
    /// `a.transform(&b.transform(v))`.
    #[doc(alias = "and_then")]
    #[must_use]
    pub fn compose(&self, rhs: &Self) -> Self {
        Self::new(
            self.orientation.compose(&rhs.orientation),
            self.orientation.rotate_vector(&rhs.translation) + self.translation,
        )
    }
}

impl<R: Rotation + Display> Display for HomogeneousTransform<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Translation: [{}, {}, {}], Orientation: {}",
            self.translation.x, self.translation.y, self.translation.z, self.orientation
        )
    }
}

impl<R: Rotation> Mul for HomogeneousTransform<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<R: Rotation> Mul<&HomogeneousTransform<R>> for HomogeneousTransform<R> {
    type Output = Self;

    fn mul(self, rhs: &HomogeneousTransform<R>) -> Self::Output {
        self.compose(rhs)
    }
}

impl<R: Rotation> Mul<&HomogeneousTransform<R>> for &HomogeneousTransform<R> {
    type Output = HomogeneousTransform<R>;

    fn mul(self, rhs: &HomogeneousTransform<R>) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Isometry3> for HomogeneousTransform<UnitQuaternion> {
    fn from(isometry: Isometry3) -> Self {
        Self::new(isometry.rotation, isometry.translation.vector)
    }
}

impl From<HomogeneousTransform<UnitQuaternion>> for Isometry3 {
    fn from(transform: HomogeneousTransform<UnitQuaternion>) -> Self {
        Isometry3::from_parts(
            Translation3::from(transform.translation),
            transform.orientation,
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl<R> AbsDiffEq<Self> for HomogeneousTransform<R>
where
    R: AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        R::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.orientation.abs_diff_eq(&other.orientation, epsilon)
            && self.translation.abs_diff_eq(&other.translation, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<R> RelativeEq for HomogeneousTransform<R>
where
    R: RelativeEq<Epsilon = f64>,
{
    fn default_max_relative() -> Self::Epsilon {
        R::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.orientation
            .relative_eq(&other.orientation, epsilon, max_relative)
            && self
                .translation
                .relative_eq(&other.translation, epsilon, max_relative)
    }
}
