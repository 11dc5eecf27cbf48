//! Hanging chain (rope) bodies.

use crate::body::Body;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::vec::Vec2;
use crate::world::{BodyId, World};
use alloc::vec::Vec as AllocVec;

/// Configuration for a chain body.
pub struct ChainConfig<F: Float> {
    /// Position of the first mass.
    pub start: Vec2<F>,
    /// Number of links. Zero yields an empty body. Otherwise the chain has
    /// `segments + 1` masses.
    pub segments: usize,
    /// Offset between consecutive masses, along +y.
    pub spacing: F,
    pub stiffness: F,
    pub damping: F,
    /// Pin the first mass in place, making it a fixed anchor.
    pub pin_first: bool,
    pub hit_radius: F,
    pub tag: u32,
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        ChainConfig {
            start: Vec2::zero(),
            segments: 10,
            spacing: F::from_f32(25.0),
            stiffness: F::from_f32(0.01),
            damping: F::from_f32(0.99),
            pin_first: false,
            hit_radius: F::from_f32(3.5),
            tag: 0,
        }
    }
}

impl<F: Float> ChainConfig<F> {
    /// Build the chain into `world` and return its body handle: a strictly
    /// linear graph of `segments + 1` masses and `segments` springs.
    pub fn spawn(&self, world: &mut World<F>) -> BodyId {
        let mut body = Body::new(self.stiffness).with_tag(self.tag);
        if self.segments == 0 {
            return world.add_body(body);
        }

        let mut handles = AllocVec::with_capacity(self.segments + 1);
        for i in 0..=self.segments {
            let pos = Vec2::new(
                self.start.x,
                self.start.y + self.spacing * F::from_f32(i as f32),
            );
            handles.push(world.add_mass(Mass::new(pos, self.hit_radius).with_tag(self.tag)));
        }

        for &h in &handles {
            body.add_mass(h);
        }

        for i in 0..self.segments {
            let s = Spring::between(
                handles[i],
                handles[i + 1],
                world.masses(),
                self.stiffness,
                self.damping,
            );
            body.add_spring(s);
        }

        if self.pin_first {
            world.mass_mut(handles[0]).pin();
        }

        world.add_body(body)
    }
}
