//! Radial ring bodies, with or without a hub.

use crate::body::Body;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::vec::Vec2;
use crate::world::{BodyId, World};
use alloc::vec::Vec as AllocVec;

/// Configuration for a ring body.
pub struct RingConfig<F: Float> {
    pub center: Vec2<F>,
    /// Number of perimeter masses. Zero yields an empty body (no hub
    /// either).
    pub count: usize,
    pub radius: F,
    pub stiffness: F,
    pub damping: F,
    /// Add a center mass with spokes to every perimeter mass.
    pub include_hub: bool,
    /// Pointer hit half-extent for every mass.
    pub hit_radius: F,
    pub tag: u32,
}

impl<F: Float> Default for RingConfig<F> {
    fn default() -> Self {
        RingConfig {
            center: Vec2::zero(),
            count: 10,
            radius: F::from_f32(100.0),
            stiffness: F::from_f32(0.01),
            damping: F::from_f32(0.99),
            include_hub: true,
            hit_radius: F::from_f32(3.5),
            tag: 0,
        }
    }
}

impl<F: Float> RingConfig<F> {
    /// Build the ring into `world` and return its body handle.
    ///
    /// Masses: optional hub first, then `count` perimeter masses at an
    /// angle step of `2π / count`. Springs: consecutive masses over the
    /// whole list joined in sequence, one near-closure edge from the mass
    /// at index 1 to the last mass, and (with a hub) one spoke from every
    /// perimeter mass back to the hub. The hub's link to the first
    /// perimeter mass therefore appears twice — once from the consecutive
    /// walk and once as a spoke — which is part of the shipped behavior.
    pub fn spawn(&self, world: &mut World<F>) -> BodyId {
        let mut body = Body::new(self.stiffness).with_tag(self.tag);
        if self.count == 0 {
            return world.add_body(body);
        }

        let mut handles = AllocVec::with_capacity(self.count + 1);
        if self.include_hub {
            handles.push(world.add_mass(Mass::new(self.center, self.hit_radius).with_tag(self.tag)));
        }

        let tau = F::two() * F::pi();
        for i in 0..self.count {
            let angle = tau * F::from_f32(i as f32) / F::from_f32(self.count as f32);
            let pos = self.center
                + Vec2::new(self.radius * angle.cos(), self.radius * angle.sin());
            handles.push(world.add_mass(Mass::new(pos, self.hit_radius).with_tag(self.tag)));
        }

        for &h in &handles {
            body.add_mass(h);
        }

        for i in 0..handles.len() - 1 {
            let s = Spring::between(
                handles[i],
                handles[i + 1],
                world.masses(),
                self.stiffness,
                self.damping,
            );
            body.add_spring(s);
        }

        if handles.len() >= 2 {
            let s = Spring::between(
                handles[1],
                handles[handles.len() - 1],
                world.masses(),
                self.stiffness,
                self.damping,
            );
            body.add_spring(s);
        }

        if self.include_hub {
            for i in 1..handles.len() {
                let s = Spring::between(
                    handles[i],
                    handles[0],
                    world.masses(),
                    self.stiffness,
                    self.damping,
                );
                body.add_spring(s);
            }
        }

        world.add_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_masses_sit_on_the_circle() {
        let mut world: World<f32> = World::new();
        let config = RingConfig {
            center: Vec2::new(50.0, 50.0),
            count: 12,
            radius: 30.0,
            include_hub: false,
            ..RingConfig::default()
        };
        let id = config.spawn(&mut world);
        for &mid in world.body(id).masses() {
            let d = world.mass(mid).position.distance(config.center);
            assert!((d - 30.0).abs() < 1e-3, "perimeter mass at distance {}", d);
        }
    }

    #[test]
    fn hub_sits_at_center() {
        let mut world: World<f32> = World::new();
        let config = RingConfig {
            center: Vec2::new(7.0, -3.0),
            ..RingConfig::default()
        };
        let id = config.spawn(&mut world);
        let hub = world.body(id).masses()[0];
        assert_eq!(world.mass(hub).position, Vec2::new(7.0, -3.0));
    }
}
