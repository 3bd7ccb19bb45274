//! Narrow wrapper around the rapier3d provider.
//!
//! Owns the rigid-body/collider sets and the stepping pipeline; the rest of
//! the crate talks to it through descriptors, handles and `Vec3`, never
//! through rapier types directly.

use rapier3d::prelude::*;

use crate::core::math::{Quat, Vec3};
use crate::domain::config::{BodyDescriptor, ColliderDescriptor};

#[inline]
fn to_na(v: Vec3) -> Vector {
    Vector::new(v.x, v.y, v.z)
}

/// Closest collider struck by a pick ray
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub body: RigidBodyHandle,
    /// World-space intersection point
    pub point: Vec3,
    /// Distance along the (normalized) ray direction
    pub toi: f32,
}

/// All rapier state for one sandbox. Gravity is zero: the only ambient
/// force is the attraction field, re-applied every tick.
pub struct PhysicsWorld {
    gravity: Vector,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            gravity: Vector::new(0.0, 0.0, 0.0),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Advance the simulation by one step of `dt` seconds.
    ///
    /// Called exactly once per external tick; rapier handles sub-step
    /// stability internally.
    pub fn step(&mut self, dt: f32) {
        if dt > 0.0 && dt.is_finite() {
            self.integration_parameters.dt = dt;
        }
        self.pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Create a ball body plus its collider and return the body handle
    pub fn spawn_ball(
        &mut self,
        body: &BodyDescriptor,
        collider: &ColliderDescriptor,
    ) -> RigidBodyHandle {
        let builder = if body.kinematic {
            RigidBodyBuilder::kinematic_position_based()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let rigid_body = builder
            .translation(to_na(body.position))
            .linear_damping(body.linear_damping)
            .build();
        let handle = self.bodies.insert(rigid_body);

        let ball = ColliderBuilder::ball(collider.radius)
            .mass(collider.mass)
            .restitution(collider.restitution)
            .build();
        self.colliders.insert_with_parent(ball, handle, &mut self.bodies);

        handle
    }

    /// Cast a ray and return the closest hit, if any.
    ///
    /// `dir` does not need to be normalized; it is normalized here so
    /// `max_distance` is in world units. `solid` makes a ray starting
    /// inside a collider report the origin as the hit. An empty world is a
    /// clean miss. `exclude` keeps the kinematic pointer probe from
    /// catching its own rays.
    pub fn cast_ray(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
        solid: bool,
        exclude: Option<RigidBodyHandle>,
    ) -> Option<RayHit> {
        let dir = dir.normalize();
        if dir.length_squared() == 0.0 {
            return None;
        }

        let mut filter = QueryFilter::default();
        if let Some(handle) = exclude {
            filter = filter.exclude_rigid_body(handle);
        }

        let query_pipeline = self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        );

        let ray = Ray::new(to_na(origin), to_na(dir));
        let (collider_handle, toi) = query_pipeline.cast_ray(&ray, max_distance, solid)?;

        let collider = self.colliders.get(collider_handle)?;
        let body = collider.parent()?;
        Some(RayHit {
            body,
            point: origin + dir * toi,
            toi,
        })
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_dynamic(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.get(handle).map(|b| b.is_dynamic()).unwrap_or(false)
    }

    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        let body = self.bodies.get(handle)?;
        let t = body.position().translation;
        Some(Vec3::new(t.x, t.y, t.z))
    }

    pub fn rotation(&self, handle: RigidBodyHandle) -> Option<Quat> {
        let body = self.bodies.get(handle)?;
        let r = body.position().rotation;
        Some(Quat::new(r.x, r.y, r.z, r.w))
    }

    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        let body = self.bodies.get(handle)?;
        let v = body.linvel();
        Some(Vec3::new(v.x, v.y, v.z))
    }

    /// Teleport a body (the way kinematic bodies are driven)
    pub fn set_translation(&mut self, handle: RigidBodyHandle, position: Vec3, wake: bool) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(to_na(position), wake);
        }
    }

    /// Drop accumulated forces, then apply `force` until further notice
    pub fn set_force(&mut self, handle: RigidBodyHandle, force: Vec3, wake: bool) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.reset_forces(wake);
            body.add_force(to_na(force), wake);
        }
    }

    /// Instantaneous momentum change at a world-space point, waking the
    /// body so a resting ball still reacts
    pub fn apply_impulse_at_point(
        &mut self,
        handle: RigidBodyHandle,
        impulse: Vec3,
        point: Vec3,
        wake: bool,
    ) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.apply_impulse_at_point(to_na(impulse), to_na(point), wake);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_descriptors(position: Vec3, kinematic: bool) -> (BodyDescriptor, ColliderDescriptor) {
        (
            BodyDescriptor {
                kinematic,
                position,
                linear_damping: 0.6,
            },
            ColliderDescriptor {
                radius: 0.6,
                mass: 0.6,
                restitution: 0.3,
            },
        )
    }

    #[test]
    fn cast_ray_on_empty_world_is_a_clean_miss() {
        let world = PhysicsWorld::new();
        let hit = world.cast_ray(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            50.0,
            true,
            None,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn cast_ray_hits_a_ball_on_the_ray() {
        let mut world = PhysicsWorld::new();
        let (body, collider) = ball_descriptors(Vec3::zero(), false);
        let handle = world.spawn_ball(&body, &collider);

        let hit = world
            .cast_ray(
                Vec3::new(0.0, 0.0, 10.0),
                Vec3::new(0.0, 0.0, -1.0),
                50.0,
                true,
                None,
            )
            .expect("ray through the ball should hit");
        assert_eq!(hit.body, handle);
        // Sphere surface is 0.6 in front of the center
        assert!((hit.toi - 9.4).abs() < 1e-2);
        assert!((hit.point.z - 0.6).abs() < 1e-2);
    }

    #[test]
    fn excluded_body_is_invisible_to_rays() {
        let mut world = PhysicsWorld::new();
        let (body, collider) = ball_descriptors(Vec3::zero(), true);
        let probe = world.spawn_ball(&body, &collider);

        let hit = world.cast_ray(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            50.0,
            true,
            Some(probe),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn impulse_moves_a_resting_body() {
        let mut world = PhysicsWorld::new();
        let (body, collider) = ball_descriptors(Vec3::zero(), false);
        let handle = world.spawn_ball(&body, &collider);

        world.apply_impulse_at_point(
            handle,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.6),
            true,
        );
        world.step(1.0 / 60.0);

        let vel = world.linear_velocity(handle).expect("body exists");
        assert!(vel.x > 0.1, "expected +X velocity, got {vel:?}");
    }

    #[test]
    fn kinematic_bodies_ignore_forces_but_follow_teleports() {
        let mut world = PhysicsWorld::new();
        let (body, collider) = ball_descriptors(Vec3::zero(), true);
        let probe = world.spawn_ball(&body, &collider);
        assert!(!world.is_dynamic(probe));

        world.set_force(probe, Vec3::new(100.0, 0.0, 0.0), true);
        world.step(1.0 / 60.0);
        let pos = world.translation(probe).expect("body exists");
        assert!(pos.length() < 1e-4, "forces must not move a kinematic body");

        world.set_translation(probe, Vec3::new(2.0, -1.0, 0.0), true);
        let pos = world.translation(probe).expect("body exists");
        assert!((pos.x - 2.0).abs() < 1e-6 && (pos.y + 1.0).abs() < 1e-6);
    }
}
