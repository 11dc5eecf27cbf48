//! The world: a mass arena plus bodies, addressed by stable handles.

use crate::body::{self, Body};
use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass::Mass;
use crate::observer::StepObserver;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Stable handle into the world's mass arena.
///
/// Masses are never deleted, so a plain index is a permanent identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MassId(pub usize);

/// Stable handle into the world's body list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyId(pub usize);

/// Render geometry for one mass: drawn as a filled circle by the host.
#[derive(Copy, Clone, Debug)]
pub struct MassSnapshot<F: Float> {
    pub position: Vec2<F>,
    pub radius: F,
    pub tag: u32,
}

/// Render geometry for one spring: drawn as a line by the host. `tag` is
/// the owning body's tag.
#[derive(Copy, Clone, Debug)]
pub struct SpringSnapshot<F: Float> {
    pub pivot: Vec2<F>,
    pub bob: Vec2<F>,
    pub tag: u32,
}

/// The simulation world: every mass lives here, exactly once, for the
/// process lifetime. Bodies and springs hold [`MassId`] handles into the
/// arena, so the same mass can back any number of springs and bodies
/// without aliasing hazards.
pub struct World<F: Float> {
    masses: AllocVec<Mass<F>>,
    bodies: AllocVec<Body<F>>,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        World {
            masses: AllocVec::new(),
            bodies: AllocVec::new(),
        }
    }

    pub fn add_mass(&mut self, mass: Mass<F>) -> MassId {
        let id = MassId(self.masses.len());
        self.masses.push(mass);
        id
    }

    pub fn add_body(&mut self, body: Body<F>) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Wire a spring between two live masses inside a body, capturing the
    /// current displacement as the rest offset. This is the validated
    /// manual-construction path; builders index the arena directly.
    pub fn connect(
        &mut self,
        body: BodyId,
        pivot: MassId,
        bob: MassId,
        k: F,
        damping: F,
    ) -> Result<(), PhysicsError> {
        self.try_mass(pivot)?;
        self.try_mass(bob)?;
        self.try_body(body)?;
        let spring = Spring::between(pivot, bob, &self.masses, k, damping);
        self.bodies[body.0].add_spring(spring);
        Ok(())
    }

    pub fn mass(&self, id: MassId) -> &Mass<F> {
        &self.masses[id.0]
    }

    pub fn mass_mut(&mut self, id: MassId) -> &mut Mass<F> {
        &mut self.masses[id.0]
    }

    pub fn try_mass(&self, id: MassId) -> Result<&Mass<F>, PhysicsError> {
        self.masses.get(id.0).ok_or(PhysicsError::MassOutOfBounds {
            index: id.0,
            count: self.masses.len(),
        })
    }

    pub fn body(&self, id: BodyId) -> &Body<F> {
        &self.bodies[id.0]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body<F> {
        &mut self.bodies[id.0]
    }

    pub fn try_body(&self, id: BodyId) -> Result<&Body<F>, PhysicsError> {
        self.bodies.get(id.0).ok_or(PhysicsError::BodyOutOfBounds {
            index: id.0,
            count: self.bodies.len(),
        })
    }

    pub fn masses(&self) -> &[Mass<F>] {
        &self.masses
    }

    /// Mutable view of the arena, for driving a single body by hand.
    pub fn masses_mut(&mut self) -> &mut [Mass<F>] {
        &mut self.masses
    }

    pub fn bodies(&self) -> &[Body<F>] {
        &self.bodies
    }

    pub fn mass_count(&self) -> usize {
        self.masses.len()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the whole world one frame.
    ///
    /// Every body's spring pass runs first (bodies in insertion order,
    /// springs in insertion order within each body), then every arena mass
    /// integrates exactly once — even masses shared between bodies.
    pub fn step<O: StepObserver>(&mut self, config: &SimConfig<F>, observer: &mut O) {
        for b in &self.bodies {
            b.apply_springs(&mut self.masses, config.damping_mode);
        }
        observer.on_springs_applied();

        for mass in self.masses.iter_mut() {
            body::integrate(mass, config);
        }
        observer.on_integrate();

        observer.on_step_complete();
    }

    /// Render geometry for every live mass, in arena order.
    pub fn mass_snapshots(&self) -> AllocVec<MassSnapshot<F>> {
        self.masses
            .iter()
            .map(|m| MassSnapshot { position: m.position, radius: m.radius, tag: m.tag })
            .collect()
    }

    /// Render geometry for every live spring, bodies in insertion order.
    pub fn spring_snapshots(&self) -> AllocVec<SpringSnapshot<F>> {
        let mut out = AllocVec::new();
        for b in &self.bodies {
            out.extend(b.spring_snapshots(&self.masses));
        }
        out
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new()
    }
}
