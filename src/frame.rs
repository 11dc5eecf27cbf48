//! Rectangular frame bodies (perimeter only).

use crate::body::Body;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::vec::Vec2;
use crate::world::{BodyId, World};
use alloc::vec::Vec as AllocVec;

/// Configuration for a rectangular frame body.
pub struct FrameConfig<F: Float> {
    pub center: Vec2<F>,
    pub width: F,
    pub height: F,
    /// Points per side. Zero yields an empty body; otherwise the perimeter
    /// carries `4 * density` masses.
    pub density: usize,
    pub stiffness: F,
    pub damping: F,
    pub hit_radius: F,
    pub tag: u32,
}

impl<F: Float> Default for FrameConfig<F> {
    fn default() -> Self {
        FrameConfig {
            center: Vec2::zero(),
            width: F::from_f32(120.0),
            height: F::from_f32(120.0),
            density: 4,
            stiffness: F::from_f32(0.01),
            damping: F::from_f32(0.99),
            hit_radius: F::from_f32(3.5),
            tag: 0,
        }
    }
}

impl<F: Float> FrameConfig<F> {
    /// Build the frame into `world` and return its body handle.
    ///
    /// The perimeter is walked bottom → right → top → left with `density`
    /// points per side; consecutive points are joined in sequence and a
    /// final edge closes the loop back to the first point.
    pub fn spawn(&self, world: &mut World<F>) -> BodyId {
        let mut body = Body::new(self.stiffness).with_tag(self.tag);
        if self.density == 0 {
            return world.add_body(body);
        }

        let segs = self.density;
        let half_w = self.width * F::half();
        let half_h = self.height * F::half();
        let mut handles = AllocVec::with_capacity(segs * 4);

        let place = |world: &mut World<F>, x: F, y: F| {
            world.add_mass(Mass::new(Vec2::new(x, y), self.hit_radius).with_tag(self.tag))
        };

        // Bottom edge (left to right)
        for i in 0..segs {
            let t = F::from_f32(i as f32) / F::from_f32(segs as f32);
            let x = self.center.x - half_w + self.width * t;
            let y = self.center.y - half_h;
            handles.push(place(world, x, y));
        }
        // Right edge (bottom to top)
        for i in 0..segs {
            let t = F::from_f32(i as f32) / F::from_f32(segs as f32);
            let x = self.center.x + half_w;
            let y = self.center.y - half_h + self.height * t;
            handles.push(place(world, x, y));
        }
        // Top edge (right to left)
        for i in 0..segs {
            let t = F::from_f32(i as f32) / F::from_f32(segs as f32);
            let x = self.center.x + half_w - self.width * t;
            let y = self.center.y + half_h;
            handles.push(place(world, x, y));
        }
        // Left edge (top to bottom)
        for i in 0..segs {
            let t = F::from_f32(i as f32) / F::from_f32(segs as f32);
            let x = self.center.x - half_w;
            let y = self.center.y + half_h - self.height * t;
            handles.push(place(world, x, y));
        }

        for &h in &handles {
            body.add_mass(h);
        }

        let n = handles.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let s = Spring::between(
                handles[i],
                handles[j],
                world.masses(),
                self.stiffness,
                self.damping,
            );
            body.add_spring(s);
        }

        world.add_body(body)
    }
}
