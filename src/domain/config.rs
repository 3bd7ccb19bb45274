use serde::{Deserialize, Serialize};

use crate::core::error::SandboxError;
use crate::core::math::Vec3;

/// Sandbox tuning parameters.
///
/// Injected at construction (optionally as JSON through the facade) instead
/// of living in a process-wide debug singleton. Defaults reproduce the
/// shipped ball-pit look: 30 balls on a radius-5 shell, a 3.5-unit pull
/// toward the origin, pointer impulses scaled by 10.
///
/// `pointer_world_scale` and `ray_max_distance` are observed defaults that
/// assume the stock camera setup; hosts with a different frustum should
/// retune them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Number of dynamic balls (the kinematic pointer probe is extra)
    pub object_count: u32,
    /// Sphere radius shared by every ball, probe included
    pub ball_radius: f32,
    /// Radius of the shell the pool spawns on
    pub spawn_radius: f32,
    /// Linear damping applied to every body
    pub linear_damping: f32,
    /// Collider restitution
    pub restitution: f32,
    /// Magnitude of the central attraction force
    pub attraction_force: f32,
    /// World point the attraction pulls toward
    pub attraction_target: [f32; 3],
    /// Pointer delta to impulse multiplier
    pub pointer_force_coef: f32,
    /// NDC to world mapping scale for the pointer plane (z = 0)
    pub pointer_world_scale: f32,
    /// Pick ray clamp, in world units
    pub ray_max_distance: f32,
    /// Seed for the shell placement RNG
    pub seed: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            object_count: 30,
            ball_radius: 0.6,
            spawn_radius: 5.0,
            linear_damping: 0.6,
            restitution: 0.3,
            attraction_force: 3.5,
            attraction_target: [0.0, 0.0, 0.0],
            pointer_force_coef: 10.0,
            pointer_world_scale: 10.0,
            ray_max_distance: 50.0,
            seed: 12345,
        }
    }
}

impl SandboxConfig {
    pub fn from_json(json: &str) -> Result<Self, SandboxError> {
        let config: SandboxConfig =
            serde_json::from_str(json).map_err(|e| SandboxError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn attraction_target(&self) -> Vec3 {
        let [x, y, z] = self.attraction_target;
        Vec3::new(x, y, z)
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        if !(self.ball_radius > 0.0) {
            return Err(SandboxError::InvalidConfig("ball_radius must be positive".into()));
        }
        if !(self.spawn_radius >= 0.0) {
            return Err(SandboxError::InvalidConfig("spawn_radius must not be negative".into()));
        }
        if !(self.ray_max_distance > 0.0) {
            return Err(SandboxError::InvalidConfig("ray_max_distance must be positive".into()));
        }
        if !(self.attraction_force >= 0.0) {
            return Err(SandboxError::InvalidConfig("attraction_force must not be negative".into()));
        }
        if !self.pointer_world_scale.is_finite() || !self.pointer_force_coef.is_finite() {
            return Err(SandboxError::InvalidConfig("pointer scales must be finite".into()));
        }
        if !(self.linear_damping >= 0.0) {
            return Err(SandboxError::InvalidConfig("linear_damping must not be negative".into()));
        }
        if !(self.restitution >= 0.0) {
            return Err(SandboxError::InvalidConfig("restitution must not be negative".into()));
        }
        Ok(())
    }
}

/// How a rigid body is created, before any collider is attached
#[derive(Clone, Copy, Debug)]
pub struct BodyDescriptor {
    /// Kinematic bodies are driven by direct translation, not forces
    pub kinematic: bool,
    pub position: Vec3,
    pub linear_damping: f32,
}

/// Ball collider parameters (the pool is spheres only)
#[derive(Clone, Copy, Debug)]
pub struct ColliderDescriptor {
    pub radius: f32,
    pub mass: f32,
    pub restitution: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SandboxConfig::default().validate().is_ok());
    }

    #[test]
    fn json_round_trip_keeps_overrides() {
        let config = SandboxConfig::from_json(r#"{"object_count":3,"spawn_radius":5.0}"#)
            .expect("partial config should parse");
        assert_eq!(config.object_count, 3);
        // Untouched fields fall back to the shipped defaults
        assert!((config.attraction_force - 3.5).abs() < 1e-6);

        let echoed = SandboxConfig::from_json(&config.to_json()).expect("echo should parse");
        assert_eq!(echoed.object_count, 3);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let err = SandboxConfig::from_json(r#"{"ball_radius":0.0}"#).unwrap_err();
        assert!(matches!(err, SandboxError::InvalidConfig(_)));
    }
}
