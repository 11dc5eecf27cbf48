use springy::{GridConfig, NoOpStepObserver, SimConfig, Vec2, World};

#[test]
fn lattice_counts() {
    let mut world: World<f32> = World::new();
    let id = GridConfig { density: 4, ..GridConfig::default() }.spawn(&mut world);

    let body = world.body(id);
    assert_eq!(body.mass_count(), 16);
    // 3 horizontal + 3 vertical edges per applicable row/column: 2 * 4 * 3
    assert_eq!(body.spring_count(), 24);
}

#[test]
fn zero_density_yields_empty_body() {
    let mut world: World<f32> = World::new();
    let id = GridConfig { density: 0, ..GridConfig::default() }.spawn(&mut world);
    assert_eq!(world.body(id).mass_count(), 0);
    assert_eq!(world.body(id).spring_count(), 0);
}

#[test]
fn rest_offsets_match_lattice_spacing() {
    let mut world: World<f32> = World::new();
    let config = GridConfig { width: 90.0, height: 60.0, density: 3, ..GridConfig::default() };
    let id = config.spawn(&mut world);

    let body = world.body(id);
    // Horizontal springs first (3 rows * 2), then vertical (2 * 3).
    for s in &body.springs()[..6] {
        assert_eq!(s.rest_offset, Vec2::new(30.0, 0.0));
    }
    for s in &body.springs()[6..] {
        assert_eq!(s.rest_offset, Vec2::new(0.0, 20.0));
    }
}

#[test]
fn pinned_top_row_drapes_under_gravity() {
    let mut world: World<f32> = World::new();
    let config = GridConfig {
        origin: Vec2::new(100.0, 100.0),
        density: 5,
        stiffness: 0.1,
        ..GridConfig::default()
    };
    let id = config.spawn(&mut world);

    // Row-major: the first `density` handles are the top row.
    let top: Vec<_> = world.body(id).masses()[..5].to_vec();
    let bottom: Vec<_> = world.body(id).masses()[20..].to_vec();
    let top_initial: Vec<_> = top.iter().map(|&m| world.mass(m).position).collect();
    for &m in &top {
        world.mass_mut(m).pin();
    }
    let bottom_initial: Vec<f32> = bottom.iter().map(|&m| world.mass(m).position.y).collect();

    let sim = SimConfig::new().with_gravity(Vec2::new(0.0, 0.4));
    for _ in 0..120 {
        world.step(&sim, &mut NoOpStepObserver);
    }

    for (&m, &p0) in top.iter().zip(&top_initial) {
        assert_eq!(world.mass(m).position, p0, "pinned top row must not move");
    }
    for (&m, &y0) in bottom.iter().zip(&bottom_initial) {
        let y = world.mass(m).position.y;
        assert!(y > y0, "bottom row should sag below its initial y {}, got {}", y0, y);
    }
}
