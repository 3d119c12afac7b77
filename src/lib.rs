//! This library provides homogeneous transformations for rigid bodies: the pose (ie, orientation
//! and position) of one reference frame relative to another, stored as a unit quaternion and a
//! translation rather than as a 4x4 matrix.
//!
//! The central type is [`HomogeneousTransform`]. With it you can
//!
//! - convert the coordinates of a point from a local frame into its reference frame
//!   ([`HomogeneousTransform::transform`]) and back
//!   ([`HomogeneousTransform::inverse_transform`]);
//! - place a frame relative to another one, measuring either along the other frame's axes or
//!   along the global axes (see [`RelativeTo`]);
//! - chain frames ([`HomogeneousTransform::compose`], or `*`) and invert them
//!   ([`HomogeneousTransform::inverse`]);
//! - move to and from the conventional 4x4 [homogeneous matrix] representation
//!   ([`HomogeneousTransform::to_matrix`] and [`HomogeneousTransform::from_matrix`]).
//!
//! The rotation algebra itself is delegated to nalgebra through the [`Rotation`] trait, which is
//! implemented for [`nalgebra::UnitQuaternion`] (the default) and [`nalgebra::Rotation3`].
//!
//! # Examples
//!
//! Assume a robot arm whose shoulder sits on a base, with a camera bolted onto the shoulder. We
//! know where the base is in the world, where the shoulder is relative to the base, and where the
//! camera is relative to the shoulder. The camera sees something, and we want to know where that
//! something is in the world.
//!
//! ```
//! use homtran::{HomogeneousTransform, RelativeTo};
//! use nalgebra::{UnitQuaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // the base stands at (2, 0, 0), turned a quarter turn to the left
//! let base = HomogeneousTransform::new(
//!     UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
//!     Vector3::new(2., 0., 0.),
//! );
//!
//! // the shoulder sits 1m above the base, measured along the base's own axes
//! let shoulder = HomogeneousTransform::relative_to(
//!     UnitQuaternion::identity(),
//!     Vector3::new(0., 0., 1.),
//!     RelativeTo::Local(&base),
//! );
//!
//! // the camera is mounted 10cm forward on the shoulder (again along the shoulder's own axes)
//! let camera_on_shoulder = HomogeneousTransform::new(
//!     UnitQuaternion::identity(),
//!     Vector3::new(0.1, 0., 0.),
//! );
//! let camera = shoulder * camera_on_shoulder;
//!
//! // the camera sees something 3m straight ahead
//! let seen = camera.transform(&Vector3::new(3., 0., 0.));
//!
//! // "straight ahead" for the base is the world's y axis
//! approx::assert_relative_eq!(seen, Vector3::new(2., 3.1, 1.), epsilon = 1e-14);
//!
//! // the same answer via the matrix representation
//! let homogeneous = camera.to_matrix() * nalgebra::Vector4::new(3., 0., 0., 1.);
//! approx::assert_relative_eq!(homogeneous.xyz(), seen, epsilon = 1e-14);
//! ```
//!
//! [homogeneous matrix]: https://en.wikipedia.org/wiki/Transformation_matrix#Affine_transformations

mod error;
mod frame;
mod transform;

pub mod rotation;

pub(crate) type Vector3 = nalgebra::Vector3<f64>;
pub(crate) type Vector4 = nalgebra::Vector4<f64>;
pub(crate) type Matrix3 = nalgebra::Matrix3<f64>;
pub(crate) type Matrix4 = nalgebra::Matrix4<f64>;
pub(crate) type UnitQuaternion = nalgebra::UnitQuaternion<f64>;
pub(crate) type Rotation3 = nalgebra::Rotation3<f64>;
pub(crate) type Isometry3 = nalgebra::Isometry3<f64>;

/// How far (in Euclidean norm) the final row of a homogeneous matrix may deviate from
/// `[0, 0, 0, 1]` before [`HomogeneousTransform::from_matrix`] rejects it.
pub const FINAL_ROW_TOLERANCE: f64 = 1e-15;

/// How far (in Frobenius norm) `mᵀm` may deviate from the identity before a rotation block `m` is
/// rejected as not orthonormal.
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-12;

pub use error::InvalidArgument;
pub use frame::RelativeTo;
pub use rotation::Rotation;
pub use transform::HomogeneousTransform;
