//! Point masses with explicit Euler integration.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass — position, velocity, and a pointer hit region.
///
/// Effective mass is uniformly 1: springs write straight into `velocity`
/// and `update` adds it to `position` once per frame (implicit unit
/// timestep). While `pinned`, the mass is kinematic: integration skips it
/// and its position is driven externally (see `crate::grab`).
#[derive(Clone, Debug)]
pub struct Mass<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    /// Half-extent of the square pointer hit region. Zero never hits.
    pub radius: F,
    /// Cosmetic render tag (e.g. a palette index), carried into snapshots.
    pub tag: u32,
    pub pinned: bool,
}

impl<F: Float> Mass<F> {
    pub fn new(position: Vec2<F>, radius: F) -> Self {
        Mass {
            position,
            velocity: Vec2::zero(),
            radius,
            tag: 0,
            pinned: false,
        }
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    /// One integration step: `position += velocity`.
    ///
    /// Pinned masses are excluded — their position is authoritative, not
    /// derived from velocity.
    pub fn update(&mut self) {
        if self.pinned {
            return;
        }
        self.position += self.velocity;
    }

    /// Pointer hit test against the square region of half-extent `radius`
    /// centered on `position`.
    pub fn contains_point(&self, point: Vec2<F>) -> bool {
        if !(self.radius > F::zero()) {
            return false;
        }
        (point.x - self.position.x).abs() <= self.radius
            && (point.y - self.position.y).abs() <= self.radius
    }

    /// Enter the kinematic override: integration skips this mass until
    /// `unpin`.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.velocity = Vec2::zero();
    }

    /// Leave the kinematic override, resuming dynamics from rest at the
    /// current position.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.velocity = Vec2::zero();
    }

    /// Drive a pinned mass to `position`, discarding any velocity springs
    /// accumulated onto it this frame. No-op unless pinned.
    pub fn move_to(&mut self, position: Vec2<F>) {
        if self.pinned {
            self.position = position;
            self.velocity = Vec2::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_adds_velocity_once() {
        let mut m = Mass::new(Vec2::new(1.0f32, 2.0), 5.0);
        m.velocity = Vec2::new(0.5, -1.0);
        m.update();
        assert_eq!(m.position, Vec2::new(1.5, 1.0));
    }

    #[test]
    fn pinned_mass_ignores_velocity() {
        let mut m = Mass::new(Vec2::new(1.0f32, 2.0), 5.0);
        m.pin();
        m.velocity = Vec2::new(100.0, 100.0);
        m.update();
        assert_eq!(m.position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn hit_region_is_square() {
        let m = Mass::new(Vec2::new(10.0f32, 10.0), 2.0);
        assert!(m.contains_point(Vec2::new(11.9, 8.1)));
        assert!(!m.contains_point(Vec2::new(12.5, 10.0)));
        assert!(!m.contains_point(Vec2::new(10.0, 12.5)));
    }

    #[test]
    fn zero_radius_never_hits() {
        let m = Mass::new(Vec2::new(3.0f32, 3.0), 0.0);
        assert!(!m.contains_point(Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn move_to_requires_pin() {
        let mut m = Mass::new(Vec2::new(0.0f32, 0.0), 1.0);
        m.move_to(Vec2::new(5.0, 5.0));
        assert_eq!(m.position, Vec2::zero());
        m.pin();
        m.move_to(Vec2::new(5.0, 5.0));
        assert_eq!(m.position, Vec2::new(5.0, 5.0));
    }
}
