//! Damped vector springs pinned to a rest displacement.

use crate::float::Float;
use crate::mass::Mass;
use crate::vec::Vec2;
use crate::world::MassId;

/// How spring damping is folded into mass velocities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DampingMode<F: Float> {
    /// Damping multiplies each endpoint's velocity inside every spring
    /// evaluation. A mass touched by `d` springs is scaled by `damping^d`
    /// per frame. This compounding is the reference contract and the
    /// default.
    PerTouch,
    /// Springs apply only their restoring force; every unpinned mass's
    /// velocity is scaled by `factor` exactly once during the integration
    /// pass, independent of degree.
    PerStep { factor: F },
}

impl<F: Float> Default for DampingMode<F> {
    fn default() -> Self {
        DampingMode::PerTouch
    }
}

/// A two-body damped spring with a fixed rest *offset*.
///
/// The target is the signed displacement `bob - pivot` captured at
/// construction, not a rest length: translating both endpoints together
/// produces zero force, but rotating the pair about either endpoint
/// produces a restoring force. The law needs no normalization, so it is
/// total — `pivot == bob` is legal and degenerates to a stationary anchor.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub pivot: MassId,
    pub bob: MassId,
    /// Signed displacement `bob.position - pivot.position` at construction.
    /// Never changes afterwards.
    pub rest_offset: Vec2<F>,
    pub k: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(pivot: MassId, bob: MassId, rest_offset: Vec2<F>, k: F, damping: F) -> Self {
        Spring { pivot, bob, rest_offset, k, damping }
    }

    /// Build a spring between two live masses, capturing the current
    /// displacement between them as the rest offset.
    pub fn between(pivot: MassId, bob: MassId, masses: &[Mass<F>], k: F, damping: F) -> Self {
        let rest_offset = masses[bob.0].position - masses[pivot.0].position;
        Spring { pivot, bob, rest_offset, k, damping }
    }

    /// One evaluation of the spring: restoring force plus damping applied
    /// to both endpoints, bob first.
    ///
    /// Runs against the already-mutated velocities of any co-incident
    /// masses evaluated earlier in the same pass; positions are untouched
    /// here, so evaluation order never changes the observed error.
    pub fn apply(&self, masses: &mut [Mass<F>], mode: DampingMode<F>) {
        let anchor = masses[self.pivot.0].position + self.rest_offset;

        let error = masses[self.bob.0].position - anchor;
        let bob = &mut masses[self.bob.0];
        bob.velocity += error.scale(-self.k);
        if let DampingMode::PerTouch = mode {
            bob.velocity = bob.velocity.scale(self.damping);
        }

        let error = anchor - masses[self.bob.0].position;
        let pivot = &mut masses[self.pivot.0];
        pivot.velocity += error.scale(-self.k);
        if let DampingMode::PerTouch = mode {
            pivot.velocity = pivot.velocity.scale(self.damping);
        }
    }
}
