use springy::{
    ChainConfig, GrabController, HeldKeys, InputSample, NoOpStepObserver, RingConfig, SimConfig,
    Vec2, World,
};

fn scripted_run() -> Vec<Vec2<f32>> {
    let mut world: World<f32> = World::new();
    let ring = RingConfig {
        center: Vec2::new(400.0, 400.0),
        hit_radius: 30.0,
        ..RingConfig::default()
    }
    .spawn(&mut world);
    ChainConfig { start: Vec2::new(600.0, 200.0), segments: 10, ..ChainConfig::default() }
        .spawn(&mut world);

    let anchor = world.body(ring).masses()[0];
    let mut controller = GrabController::new().with_anchor(anchor);
    let config = SimConfig::new();

    for frame in 0..240u32 {
        // Grab a perimeter mass for a while, drag it, let go.
        let pointer = Vec2::new(500.0, 400.0 + (frame as f32) * 0.5);
        let input = InputSample {
            pointer,
            pressed: (30..90).contains(&frame),
            just_released: frame == 90,
            keys: HeldKeys { right: frame < 3, ..HeldKeys::default() },
        };
        controller.apply(&mut world, &input);
        world.step(&config, &mut NoOpStepObserver);
    }

    world.mass_snapshots().iter().map(|s| s.position).collect()
}

#[test]
fn identical_runs_produce_identical_worlds() {
    let first = scripted_run();
    for _ in 0..4 {
        let again = scripted_run();
        assert_eq!(first.len(), again.len());
        for (a, b) in first.iter().zip(again.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
