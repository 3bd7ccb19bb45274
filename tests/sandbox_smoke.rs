//! End-to-end smoke: drive the sandbox through the same surface the web
//! host uses and check the pool behaves.

use ballpit_engine::{Camera, Sandbox, SandboxConfig, SandboxCore, Viewport};

#[test]
fn facade_smoke() {
    let mut sandbox = Sandbox::new(800.0, 600.0).expect("default construction");

    // 30 pooled balls plus the pointer probe
    assert_eq!(sandbox.body_count(), 31);
    assert_eq!(sandbox.registered_pairs(), 31);
    assert_eq!(sandbox.transforms_len(), 31 * 8);
    assert!(sandbox.mask_points_len() > 0);

    for _ in 0..10 {
        sandbox.update(1.0 / 60.0);
    }
    assert_eq!(sandbox.frame(), 10);
    assert_eq!(sandbox.body_count(), 31);

    sandbox.teardown();
    sandbox.update(1.0 / 60.0);
    assert_eq!(sandbox.frame(), 10);
}

#[test]
fn facade_accepts_partial_json_config() {
    let sandbox =
        Sandbox::with_config_json(r#"{"object_count": 5}"#, 800.0, 600.0).expect("valid config");
    assert_eq!(sandbox.body_count(), 6);

    let echoed = sandbox.config_json();
    assert!(echoed.contains("\"object_count\":5"));

    assert!(Sandbox::with_config_json(r#"{"ball_radius": -1.0}"#, 800.0, 600.0).is_err());
}

#[test]
fn pool_converges_on_the_attraction_target() {
    let config = SandboxConfig {
        object_count: 3,
        seed: 7,
        ..SandboxConfig::default()
    };
    let spawn_radius = config.spawn_radius;
    let mut core = SandboxCore::new(config, Camera::default(), Viewport::new(800.0, 600.0))
        .expect("construction");

    // Every ball starts on the spawn shell
    for r in &core.renderables()[..3] {
        assert!((r.position.length() - spawn_radius).abs() < 1e-3);
    }

    for _ in 0..100 {
        core.update(1.0 / 60.0);
    }

    // The constant pull has dragged each ball well inside the shell: from
    // 5.0 at spawn to under 3.0 after 100 ticks
    for (i, r) in core.renderables()[..3].iter().enumerate() {
        let dist = r.position.length();
        assert!(
            dist < 3.0,
            "ball {i} should have converged on the target ({dist})"
        );
    }
}
