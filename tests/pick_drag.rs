//! Pointer drag scenario: a horizontal pointer sweep across a resting ball
//! flicks that ball and only that ball.

use ballpit_engine::domain::config::{BodyDescriptor, ColliderDescriptor};
use ballpit_engine::domain::view::{Camera, Viewport};
use ballpit_engine::systems::physics::PhysicsWorld;
use ballpit_engine::systems::picking::{PickOutcome, PointerPicker};
use ballpit_engine::systems::registry::{BodyRegistry, RenderableId};
use ballpit_engine::Vec3;

fn ball(position: Vec3) -> (BodyDescriptor, ColliderDescriptor) {
    (
        BodyDescriptor {
            kinematic: false,
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
fn drag_impulses_the_struck_ball_only() {
    let mut physics = PhysicsWorld::new();
    let mut registry = BodyRegistry::new();

    let (body, collider) = ball(Vec3::zero());
    let a = physics.spawn_ball(&body, &collider);
    let (body, collider) = ball(Vec3::new(5.0, 5.0, 5.0));
    let b = physics.spawn_ball(&body, &collider);
    registry.associate(RenderableId(0), a).expect("fresh pair");
    registry.associate(RenderableId(1), b).expect("fresh pair");

    let mut picker = PointerPicker::new(10.0, 50.0, 10.0);
    let camera = Camera::default();
    let viewport = Viewport::new(800.0, 600.0);

    // Sweep left-of-center to center: the first event only establishes the
    // pointer position, the second crosses ball A with a +x delta.
    let m0 = picker.on_pointer_move(360.0, 300.0, &viewport, &camera, &mut physics, &registry, None);
    assert_eq!(m0.outcome, PickOutcome::Miss);

    let m1 = picker.on_pointer_move(400.0, 300.0, &viewport, &camera, &mut physics, &registry, None);
    assert_eq!(
        m1.outcome,
        PickOutcome::Struck {
            renderable: RenderableId(0)
        }
    );
    assert!((m1.delta.x - 1.0).abs() < 1e-5);

    physics.step(1.0 / 60.0);

    let vel_a = physics.linear_velocity(a).expect("ball a exists");
    assert!(vel_a.x > 0.1, "struck ball should fly along the drag");

    let vel_b = physics.linear_velocity(b).expect("ball b exists");
    assert!(vel_b.length() < 1e-3, "bystander ball must stay at rest");
}

#[test]
fn ray_clamp_keeps_distant_balls_unpickable() {
    let mut physics = PhysicsWorld::new();
    let mut registry = BodyRegistry::new();

    // On the pick ray but beyond the clamp
    let (body, collider) = ball(Vec3::new(0.0, 0.0, -60.0));
    let far = physics.spawn_ball(&body, &collider);
    registry.associate(RenderableId(0), far).expect("fresh pair");

    let mut picker = PointerPicker::new(10.0, 50.0, 10.0);
    let m0 = picker.on_pointer_move(
        400.0,
        300.0,
        &Viewport::new(800.0, 600.0),
        &Camera::default(),
        &mut physics,
        &registry,
        None,
    );
    assert_eq!(m0.outcome, PickOutcome::Miss);
}
