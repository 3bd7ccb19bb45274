//! Constant-magnitude pull toward a fixed world point.
//!
//! Applied every tick to each dynamic ball; kinematic bodies (the pointer
//! probe) are exempt. This is what keeps the pool clustered in view instead
//! of drifting off after a hard drag.

use crate::core::math::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct AttractionField {
    pub target: Vec3,
    pub magnitude: f32,
}

impl AttractionField {
    pub fn new(target: Vec3, magnitude: f32) -> Self {
        Self { target, magnitude }
    }

    /// Force of `magnitude` from `position` toward the target.
    ///
    /// At the target itself the direction is undefined, so the force is the
    /// zero vector - never NaN, never an error.
    pub fn force_on(&self, position: Vec3) -> Vec3 {
        (self.target - position).with_length(self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_has_requested_magnitude_and_direction() {
        let field = AttractionField::new(Vec3::zero(), 3.5);

        let force = field.force_on(Vec3::new(5.0, 0.0, 0.0));
        assert!((force.length() - 3.5).abs() < 1e-5);
        assert!(force.x < 0.0 && force.y.abs() < 1e-6 && force.z.abs() < 1e-6);

        let force = field.force_on(Vec3::new(1.0, -2.0, 2.0));
        assert!((force.length() - 3.5).abs() < 1e-5);
        // Pointing from position toward the origin
        assert!(force.dot(Vec3::new(-1.0, 2.0, -2.0)) > 0.0);
    }

    #[test]
    fn degenerate_position_gives_zero_force() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let field = AttractionField::new(target, 3.5);

        let force = field.force_on(target);
        assert_eq!(force, Vec3::zero());
        assert!(force.x.is_finite() && force.y.is_finite() && force.z.is_finite());
    }

    #[test]
    fn off_origin_target_is_respected() {
        let field = AttractionField::new(Vec3::new(0.0, 4.0, 0.0), 2.0);
        let force = field.force_on(Vec3::new(0.0, 0.0, 0.0));
        assert!((force.y - 2.0).abs() < 1e-5);
        assert!(force.x.abs() < 1e-6 && force.z.abs() < 1e-6);
    }
}
