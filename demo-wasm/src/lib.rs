use springy::{
    ChainConfig, FrameConfig, GrabController, GridConfig, HeldKeys, InputSample, NoOpStepObserver,
    RingConfig, SimConfig, Vec2, World,
};
use wasm_bindgen::prelude::*;

// ---- Playground Demo ----

#[wasm_bindgen]
pub struct Playground {
    world: World<f32>,
    controller: GrabController<f32>,
    config: SimConfig<f32>,
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl Playground {
    /// Build the fixed demo scene: one ring per flavor, two chains, a
    /// cloth, and a frame. The hub of the first ring doubles as the
    /// arrow-key anchor.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        let mut world: World<f32> = World::new();
        let center = Vec2::new(width * 0.5, height * 0.5);

        let hub_ring = RingConfig {
            center,
            count: 10,
            radius: 100.0,
            include_hub: true,
            tag: 1,
            ..RingConfig::default()
        }
        .spawn(&mut world);

        RingConfig {
            center: Vec2::new(120.0, 120.0),
            count: 36,
            radius: 100.0,
            include_hub: true,
            tag: 2,
            ..RingConfig::default()
        }
        .spawn(&mut world);

        ChainConfig {
            start: center,
            segments: 10,
            spacing: 25.0,
            tag: 3,
            ..ChainConfig::default()
        }
        .spawn(&mut world);

        ChainConfig {
            start: Vec2::new(center.x + 200.0, center.y),
            segments: 20,
            spacing: 15.0,
            tag: 4,
            ..ChainConfig::default()
        }
        .spawn(&mut world);

        GridConfig {
            origin: Vec2::new(80.0, height - 260.0),
            width: 180.0,
            height: 180.0,
            density: 6,
            tag: 5,
            ..GridConfig::default()
        }
        .spawn(&mut world);

        FrameConfig {
            center: Vec2::new(width - 160.0, 160.0),
            width: 140.0,
            height: 140.0,
            density: 4,
            tag: 6,
            ..FrameConfig::default()
        }
        .spawn(&mut world);

        let anchor = world.body(hub_ring).masses()[0];
        Playground {
            world,
            controller: GrabController::new().with_anchor(anchor),
            config: SimConfig::new(),
            width,
            height,
        }
    }

    /// Advance one frame. The caller samples input once per animation
    /// frame; there is no internal clock.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        pointer_x: f32,
        pointer_y: f32,
        pressed: bool,
        just_released: bool,
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    ) {
        let input = InputSample {
            pointer: Vec2::new(
                pointer_x.clamp(0.0, self.width),
                pointer_y.clamp(0.0, self.height),
            ),
            pressed,
            just_released,
            keys: HeldKeys { up, down, left, right },
        };
        self.controller.apply(&mut self.world, &input);
        self.world.step(&self.config, &mut NoOpStepObserver);
    }

    /// Returns flat [x, y, radius, tag] per mass, for drawing filled
    /// circles.
    pub fn mass_geometry(&self) -> Vec<f32> {
        let snapshots = self.world.mass_snapshots();
        let mut out = Vec::with_capacity(snapshots.len() * 4);
        for s in &snapshots {
            out.push(s.position.x);
            out.push(s.position.y);
            out.push(s.radius);
            out.push(s.tag as f32);
        }
        out
    }

    /// Returns flat [x1, y1, x2, y2, tag] per spring, for drawing lines.
    pub fn spring_geometry(&self) -> Vec<f32> {
        let snapshots = self.world.spring_snapshots();
        let mut out = Vec::with_capacity(snapshots.len() * 5);
        for s in &snapshots {
            out.push(s.pivot.x);
            out.push(s.pivot.y);
            out.push(s.bob.x);
            out.push(s.bob.y);
            out.push(s.tag as f32);
        }
        out
    }

    pub fn mass_count(&self) -> usize {
        self.world.mass_count()
    }

    pub fn is_holding(&self) -> bool {
        self.controller.is_holding()
    }

    /// Index of the last-grabbed body for the on-screen readout, or -1 if
    /// nothing has been grabbed yet.
    pub fn selected_body(&self) -> i32 {
        match self.controller.last_selection().and_then(|s| s.body) {
            Some(body) => body.0 as i32,
            None => -1,
        }
    }

    /// Spring count of the last-grabbed body, for the same readout.
    pub fn selected_spring_count(&self) -> usize {
        self.controller
            .last_selection()
            .and_then(|s| s.body)
            .map_or(0, |body| self.world.body(body).spring_count())
    }
}
