use springy::{FrameConfig, Vec2, World};

#[test]
fn perimeter_counts() {
    let mut world: World<f32> = World::new();
    let id = FrameConfig { density: 4, ..FrameConfig::default() }.spawn(&mut world);

    let body = world.body(id);
    assert_eq!(body.mass_count(), 16); // 4 sides * 4 points
    assert_eq!(body.spring_count(), 16, "closed loop: one edge per point");
}

#[test]
fn zero_density_yields_empty_body() {
    let mut world: World<f32> = World::new();
    let id = FrameConfig { density: 0, ..FrameConfig::default() }.spawn(&mut world);
    assert_eq!(world.body(id).mass_count(), 0);
    assert_eq!(world.body(id).spring_count(), 0);
}

#[test]
fn density_one_walks_the_corners() {
    let mut world: World<f32> = World::new();
    let config = FrameConfig {
        center: Vec2::new(0.0, 0.0),
        width: 100.0,
        height: 60.0,
        density: 1,
        ..FrameConfig::default()
    };
    let id = config.spawn(&mut world);

    let body = world.body(id);
    assert_eq!(body.mass_count(), 4);
    assert_eq!(body.spring_count(), 4);

    let corners: Vec<_> = body.masses().iter().map(|&m| world.mass(m).position).collect();
    assert_eq!(corners[0], Vec2::new(-50.0, -30.0));
    assert_eq!(corners[1], Vec2::new(50.0, -30.0));
    assert_eq!(corners[2], Vec2::new(50.0, 30.0));
    assert_eq!(corners[3], Vec2::new(-50.0, 30.0));
}

#[test]
fn closing_edge_returns_to_the_first_point() {
    let mut world: World<f32> = World::new();
    let id = FrameConfig { density: 3, ..FrameConfig::default() }.spawn(&mut world);

    let body = world.body(id);
    let masses = body.masses();
    let last = &body.springs()[body.spring_count() - 1];
    assert_eq!(last.pivot, masses[masses.len() - 1]);
    assert_eq!(last.bob, masses[0]);
}
