//! Configuration types for the simulation step.

use crate::float::Float;
use crate::spring::DampingMode;
use crate::vec::Vec2;

/// Per-step world parameters.
///
/// # Builder Pattern
/// ```
/// use springy::config::SimConfig;
/// use springy::spring::DampingMode;
/// use springy::vec::Vec2;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.4))
///     .with_damping_mode(DampingMode::PerStep { factor: 0.98 });
/// ```
pub struct SimConfig<F: Float> {
    /// Uniform acceleration added to every unpinned mass's velocity during
    /// the integration pass. Default: zero.
    pub gravity: Vec2<F>,
    /// How spring damping reaches mass velocities. Default:
    /// `DampingMode::PerTouch` (per-evaluation compounding).
    pub damping_mode: DampingMode<F>,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            gravity: Vec2::zero(),
            damping_mode: DampingMode::PerTouch,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping mode.
    pub fn with_damping_mode(mut self, mode: DampingMode<F>) -> Self {
        self.damping_mode = mode;
        self
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
