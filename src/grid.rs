//! Cloth grid bodies (structural constraints only).

use crate::body::Body;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::vec::Vec2;
use crate::world::{BodyId, World};
use alloc::vec::Vec as AllocVec;

/// Configuration for a cloth grid body.
pub struct GridConfig<F: Float> {
    /// Top-left mass position; the lattice extends in +x and +y.
    pub origin: Vec2<F>,
    pub width: F,
    pub height: F,
    /// Masses per row and per column. Zero yields an empty body.
    pub density: usize,
    pub stiffness: F,
    pub damping: F,
    pub hit_radius: F,
    pub tag: u32,
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        GridConfig {
            origin: Vec2::zero(),
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

impl<F: Float> GridConfig<F> {
    /// Build the grid into `world` and return its body handle.
    ///
    /// A `density × density` lattice in row-major order (mass at
    /// `(col, row)` has index `row * density + col`), each mass joined to
    /// its right neighbor and its neighbor below — no shear or bend
    /// constraints.
    pub fn spawn(&self, world: &mut World<F>) -> BodyId {
        let mut body = Body::new(self.stiffness).with_tag(self.tag);
        if self.density == 0 {
            return world.add_body(body);
        }

        let d = self.density;
        let x_step = self.width / F::from_f32(d as f32);
        let y_step = self.height / F::from_f32(d as f32);

        let mut handles = AllocVec::with_capacity(d * d);
        for row in 0..d {
            for col in 0..d {
                let pos = Vec2::new(
                    self.origin.x + x_step * F::from_f32(col as f32),
                    self.origin.y + y_step * F::from_f32(row as f32),
                );
                handles.push(world.add_mass(Mass::new(pos, self.hit_radius).with_tag(self.tag)));
            }
        }

        for &h in &handles {
            body.add_mass(h);
        }

        // Horizontal: (col, col+1)
        for row in 0..d {
            for col in 0..(d - 1) {
                let a = handles[row * d + col];
                let b = handles[row * d + col + 1];
                body.add_spring(Spring::between(a, b, world.masses(), self.stiffness, self.damping));
            }
        }

        // Vertical: (row, row+1)
        for row in 0..(d - 1) {
            for col in 0..d {
                let a = handles[row * d + col];
                let b = handles[(row + 1) * d + col];
                body.add_spring(Spring::between(a, b, world.masses(), self.stiffness, self.damping));
            }
        }

        world.add_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_mass_count() {
        let mut world: World<f32> = World::new();
        let id = GridConfig::default().spawn(&mut world);
        assert_eq!(world.body(id).mass_count(), 16); // 4 * 4
    }

    #[test]
    fn structural_spring_count() {
        let mut world: World<f32> = World::new();
        let id = GridConfig::default().spawn(&mut world);
        // Horizontal: 4 * 3 = 12, vertical: 3 * 4 = 12
        assert_eq!(world.body(id).spring_count(), 24);
    }

    #[test]
    fn row_spacing_spans_dimensions() {
        let mut world: World<f32> = World::new();
        let config = GridConfig { width: 40.0, height: 80.0, ..GridConfig::default() };
        let id = config.spawn(&mut world);
        let masses = world.body(id).masses();
        let first = world.mass(masses[0]).position;
        let second = world.mass(masses[1]).position;
        assert!((second.x - first.x - 10.0).abs() < 1e-6); // 40 / 4
        let below = world.mass(masses[4]).position;
        assert!((below.y - first.y - 20.0).abs() < 1e-6); // 80 / 4
    }
}
