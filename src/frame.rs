//! Selecting the reference frame that an orientation or translation is expressed in.

use crate::rotation::Rotation;
use crate::transform::HomogeneousTransform;
use crate::{UnitQuaternion, Vector3};

/// The frame relative to which an orientation or translation is given when constructing or
/// updating a [`HomogeneousTransform`].
///
/// Say we have a robot base `base` and want to place a gripper 20cm in front of it, rotated a
/// quarter turn about the base's vertical axis. There are two ways to phrase "in front of":
///
/// - [`RelativeTo::Local`]: along the base's own axes, so if the base is itself rotated, the
///   offset rotates with it;
/// - [`RelativeTo::GlobalAxes`]: along the global axes, starting from the base's origin.
///
/// [`RelativeTo::Global`] ignores any other frame and takes the values as-is.
///
/// ```
/// use homtran::{HomogeneousTransform, RelativeTo};
/// use nalgebra::{UnitQuaternion, Vector3};
///
/// let base = HomogeneousTransform::new(
///     UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2),
///     Vector3::new(1., 0., 0.),
/// );
///
/// let local = HomogeneousTransform::relative_to(
///     UnitQuaternion::identity(),
///     Vector3::new(0.2, 0., 0.),
///     RelativeTo::Local(&base),
/// );
/// // the base's x-axis points along global y
/// approx::assert_relative_eq!(local.translation(), Vector3::new(1., 0.2, 0.), epsilon = 1e-15);
///
/// let global_axes = HomogeneousTransform::relative_to(
///     UnitQuaternion::identity(),
///     Vector3::new(0.2, 0., 0.),
///     RelativeTo::GlobalAxes(&base),
/// );
/// approx::assert_relative_eq!(global_axes.translation(), Vector3::new(1.2, 0., 0.));
/// ```
#[derive(Debug)]
pub enum RelativeTo<'a, R = UnitQuaternion> {
    /// Values are given directly in the global frame.
    Global,
    /// Values are given relative to the referenced frame, measured along its own axes.
    Local(&'a HomogeneousTransform<R>),
    /// Values are given relative to the referenced frame, measured along the global axes.
    GlobalAxes(&'a HomogeneousTransform<R>),
}

// manual impls of Clone and Copy to avoid requiring R: Clone + Copy
impl<R> Clone for RelativeTo<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for RelativeTo<'_, R> {}

impl<R> Default for RelativeTo<'_, R> {
    fn default() -> Self {
        Self::Global
    }
}

impl<'a, R> From<&'a HomogeneousTransform<R>> for RelativeTo<'a, R> {
    fn from(reference: &'a HomogeneousTransform<R>) -> Self {
        Self::Local(reference)
    }
}

impl<'a, R: Rotation> RelativeTo<'a, R> {
    /// Builds the selector from an optional reference frame and a flag saying whether values are
    /// measured along that frame's own axes (`local = true`) or along the global axes.
    ///
    /// `local` is ignored when there is no reference frame.
    #[must_use]
    pub fn new(reference: Option<&'a HomogeneousTransform<R>>, local: bool) -> Self {
        match reference {
            None => Self::Global,
            Some(reference) if local => Self::Local(reference),
            Some(reference) => Self::GlobalAxes(reference),
        }
    }

    /// Returns the referenced frame, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&'a HomogeneousTransform<R>> {
        match *self {
            Self::Global => None,
            Self::Local(reference) | Self::GlobalAxes(reference) => Some(reference),
        }
    }

    /// Expresses `orientation`, given relative to this frame, in the global frame.
    ///
    /// For a local orientation the reference's orientation is applied _after_ `orientation`
    /// (`reference * orientation`); for one measured along the global axes it is applied
    /// _before_ (`orientation * reference`).
    #[must_use]
    pub fn compose_orientation(&self, orientation: R) -> R {
        match self {
            Self::Global => orientation,
            Self::Local(reference) => reference.orientation().compose(&orientation),
            Self::GlobalAxes(reference) => orientation.compose(&reference.orientation()),
        }
    }

    /// Expresses `translation`, given relative to this frame, in the global frame.
    ///
    /// Only ever uses the _reference's_ orientation, never whatever orientation the frame being
    /// placed ends up with.
    #[must_use]
    pub fn compose_translation(&self, translation: Vector3) -> Vector3 {
        match self {
            Self::Global => translation,
            Self::Local(reference) => {
                reference.translation() + reference.orientation().rotate_vector(&translation)
            }
            Self::GlobalAxes(reference) => reference.translation() + translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RelativeTo;
    use crate::rotation::Rotation;
    use crate::transform::HomogeneousTransform;
    use crate::{UnitQuaternion, Vector3};
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn parent() -> HomogeneousTransform {
        HomogeneousTransform::new(
            UnitQuaternion::from_euler_angles(0.1, 0.5, -1.3),
            Vector3::new(5., 6., 7.),
        )
    }

    #[rstest]
    #[case(None, true)]
    #[case(None, false)]
    fn no_reference_is_global(
        #[case] reference: Option<&HomogeneousTransform>,
        #[case] local: bool,
    ) {
        assert!(matches!(
            RelativeTo::new(reference, local),
            RelativeTo::Global
        ));
    }

    #[test]
    fn new_selects_axes_by_flag() {
        let parent = parent();
        assert!(matches!(
            RelativeTo::new(Some(&parent), true),
            RelativeTo::Local(_)
        ));
        assert!(matches!(
            RelativeTo::new(Some(&parent), false),
            RelativeTo::GlobalAxes(_)
        ));
        assert!(matches!(RelativeTo::from(&parent), RelativeTo::Local(_)));
        assert!(matches!(
            RelativeTo::<UnitQuaternion>::default(),
            RelativeTo::Global
        ));
        assert_eq!(RelativeTo::new(Some(&parent), false).reference(), Some(&parent));
    }

    #[test]
    fn global_passes_values_through() {
        let q = UnitQuaternion::from_euler_angles(0.7, 0., 0.2);
        let t = Vector3::new(1., 2., 3.);
        let frame = RelativeTo::<UnitQuaternion>::Global;

        assert_eq!(frame.compose_orientation(q), q);
        assert_eq!(frame.compose_translation(t), t);
        assert!(frame.reference().is_none());
    }

    #[test]
    fn local_orientation_applies_reference_last() {
        let parent = parent();
        let q = UnitQuaternion::from_euler_angles(-0.3, 0.2, 0.9);

        let composed = RelativeTo::Local(&parent).compose_orientation(q);
        assert_eq!(composed, parent.orientation() * q);
    }

    #[test]
    fn global_axes_orientation_applies_reference_first() {
        let parent = parent();
        let q = UnitQuaternion::from_euler_angles(-0.3, 0.2, 0.9);

        let composed = RelativeTo::GlobalAxes(&parent).compose_orientation(q);
        assert_eq!(composed, q * parent.orientation());
    }

    #[test]
    fn translations_start_at_reference_origin() {
        let parent = parent();
        let t = Vector3::new(-1., 0.5, 2.);

        assert_relative_eq!(
            RelativeTo::Local(&parent).compose_translation(t),
            parent.translation() + parent.orientation().rotate_vector(&t),
        );
        assert_relative_eq!(
            RelativeTo::GlobalAxes(&parent).compose_translation(t),
            Vector3::new(4., 6.5, 9.),
        );
    }
}
