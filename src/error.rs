use thiserror::Error;

/// The ways in which a matrix can fail to describe a [rigid body transform].
///
/// Only decoding a matrix (see [`HomogeneousTransform::set_matrix`] and
/// [`HomogeneousTransform::from_matrix`]) can produce this error; every other operation on a
/// transform is total.
///
/// [rigid body transform]: https://en.wikipedia.org/wiki/Rigid_transformation
/// [`HomogeneousTransform::set_matrix`]: crate::HomogeneousTransform::set_matrix
/// [`HomogeneousTransform::from_matrix`]: crate::HomogeneousTransform::from_matrix
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidArgument {
    /// The matrix was not 4x4.
    #[error("matrix must be 4x4, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    /// The final row deviated from `[0, 0, 0, 1]` by more than
    /// [`FINAL_ROW_TOLERANCE`](crate::FINAL_ROW_TOLERANCE).
    #[error("final row must be [0, 0, 0, 1], deviates by {deviation:e}")]
    FinalRow { deviation: f64 },

    /// The rotation block is not orthonormal within
    /// [`ORTHONORMALITY_TOLERANCE`](crate::ORTHONORMALITY_TOLERANCE).
    #[error("rotation block must be orthonormal, deviates by {deviation:e}")]
    NotOrthonormal { deviation: f64 },

    /// The rotation block is orthonormal but mirrors space, so no unit quaternion describes it.
    #[error("rotation block must not be a reflection, determinant is {determinant}")]
    Reflection { determinant: f64 },
}
