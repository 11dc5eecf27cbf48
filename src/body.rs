//! Bodies: deduplicated aggregates of mass handles and springs.

use crate::config::SimConfig;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::{DampingMode, Spring};
use crate::world::{MassId, MassSnapshot, SpringSnapshot};
use alloc::vec::Vec as AllocVec;

/// One simulated soft object: an ordered, deduplicated set of mass handles
/// plus the springs that join them.
///
/// A body never owns its masses — they live in the world arena and may be
/// shared with other bodies. Every mass referenced by any spring in the
/// body appears in the handle set exactly once, in first-touch order.
pub struct Body<F: Float> {
    masses: AllocVec<MassId>,
    springs: AllocVec<Spring<F>>,
    stiffness: F,
    tag: u32,
}

impl<F: Float> Body<F> {
    /// Create an empty body with a nominal stiffness.
    pub fn new(stiffness: F) -> Self {
        Body {
            masses: AllocVec::new(),
            springs: AllocVec::new(),
            stiffness,
            tag: 0,
        }
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    /// Register a mass handle, ignoring duplicates. Needed for masses that
    /// no spring touches (degenerate topologies keep their single mass this
    /// way).
    pub fn add_mass(&mut self, id: MassId) {
        if !self.masses.contains(&id) {
            self.masses.push(id);
        }
    }

    /// Append a spring and register both endpoint handles.
    pub fn add_spring(&mut self, spring: Spring<F>) {
        self.add_mass(spring.pivot);
        self.add_mass(spring.bob);
        self.springs.push(spring);
    }

    /// Evaluate every spring in insertion order.
    ///
    /// Later springs see the interim velocities left by earlier ones on
    /// shared masses; that sensitivity is part of the contract, not an
    /// accident to hide.
    pub fn apply_springs(&self, masses: &mut [Mass<F>], mode: DampingMode<F>) {
        for spring in &self.springs {
            spring.apply(masses, mode);
        }
    }

    /// One body-local step: every spring evaluated, then every owned mass
    /// integrated exactly once.
    ///
    /// For worlds with several (possibly mass-sharing) bodies, prefer
    /// `World::step`, which finishes the spring pass for all bodies before
    /// integrating anything.
    pub fn update(&self, masses: &mut [Mass<F>], config: &SimConfig<F>) {
        self.apply_springs(masses, config.damping_mode);
        for id in &self.masses {
            integrate(&mut masses[id.0], config);
        }
    }

    pub fn masses(&self) -> &[MassId] {
        &self.masses
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    pub fn mass_count(&self) -> usize {
        self.masses.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Nominal stiffness the body was built with. Individual springs may
    /// differ if wired manually.
    pub fn stiffness(&self) -> F {
        self.stiffness
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Render geometry for this body's masses, in handle order.
    pub fn mass_snapshots(&self, masses: &[Mass<F>]) -> AllocVec<MassSnapshot<F>> {
        self.masses
            .iter()
            .map(|id| {
                let m = &masses[id.0];
                MassSnapshot { position: m.position, radius: m.radius, tag: m.tag }
            })
            .collect()
    }

    /// Render geometry for this body's springs, in insertion order. Each
    /// line carries the body's tag.
    pub fn spring_snapshots(&self, masses: &[Mass<F>]) -> AllocVec<SpringSnapshot<F>> {
        self.springs
            .iter()
            .map(|s| SpringSnapshot {
                pivot: masses[s.pivot.0].position,
                bob: masses[s.bob.0].position,
                tag: self.tag,
            })
            .collect()
    }
}

/// Shared integration step: ambient acceleration, per-step damping when
/// configured, then the Euler position update. Pinned masses only run the
/// (skipped) position update.
pub(crate) fn integrate<F: Float>(mass: &mut Mass<F>, config: &SimConfig<F>) {
    if !mass.pinned {
        mass.velocity += config.gravity;
        if let DampingMode::PerStep { factor } = config.damping_mode {
            mass.velocity = mass.velocity.scale(factor);
        }
    }
    mass.update();
}
