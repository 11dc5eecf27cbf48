//! Pointer grab and keyboard impulse interaction.

use crate::float::Float;
use crate::vec::Vec2;
use crate::world::{BodyId, MassId, World};

/// Directional key states sampled by the host once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One frame's worth of host input.
#[derive(Copy, Clone, Debug)]
pub struct InputSample<F: Float> {
    pub pointer: Vec2<F>,
    pub pressed: bool,
    pub just_released: bool,
    pub keys: HeldKeys,
}

/// What the pointer is (or was last) holding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Body the mass was found in; `None` for selections made outside the
    /// body scan.
    pub body: Option<BodyId>,
    pub mass: MassId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum GrabState {
    Idle,
    Holding(Selection),
}

/// Resolves per-frame input samples into mass overrides.
///
/// Two jobs, independent of each other:
/// - a kinematic pin on the mass under the pointer while the button is
///   held (position driven directly, velocity zeroed, integration skipped)
/// - additive velocity impulses on a designated anchor mass from the held
///   direction keys
///
/// Run `apply` before `World::step` each frame so the override wins over
/// stale velocities.
pub struct GrabController<F: Float> {
    state: GrabState,
    last_selection: Option<Selection>,
    anchor: Option<MassId>,
    anchor_impulse: F,
}

impl<F: Float> GrabController<F> {
    pub fn new() -> Self {
        GrabController {
            state: GrabState::Idle,
            last_selection: None,
            anchor: None,
            anchor_impulse: F::from_f32(10.0),
        }
    }

    /// Designate the mass that receives directional-key impulses
    /// (conventionally the first mass of the first body).
    pub fn with_anchor(mut self, mass: MassId) -> Self {
        self.anchor = Some(mass);
        self
    }

    /// Set the per-frame, per-axis impulse magnitude for the anchor mass.
    pub fn with_anchor_impulse(mut self, impulse: F) -> Self {
        self.anchor_impulse = impulse;
        self
    }

    /// Resolve one frame of input against the world.
    pub fn apply(&mut self, world: &mut World<F>, input: &InputSample<F>) {
        if input.pressed {
            match self.state {
                GrabState::Idle => {
                    if let Some(selection) = hit_test(world, input.pointer) {
                        let mass = world.mass_mut(selection.mass);
                        mass.pin();
                        mass.move_to(input.pointer);
                        self.state = GrabState::Holding(selection);
                        self.last_selection = Some(selection);
                    }
                }
                GrabState::Holding(selection) => {
                    world.mass_mut(selection.mass).move_to(input.pointer);
                }
            }
        }

        if input.just_released {
            if let GrabState::Holding(selection) = self.state {
                world.mass_mut(selection.mass).unpin();
                self.state = GrabState::Idle;
            }
        }

        if let Some(id) = self.anchor {
            let impulse = self.anchor_impulse;
            let mass = world.mass_mut(id);
            if input.keys.left {
                mass.velocity.x = mass.velocity.x - impulse;
            }
            if input.keys.right {
                mass.velocity.x = mass.velocity.x + impulse;
            }
            if input.keys.up {
                mass.velocity.y = mass.velocity.y - impulse;
            }
            if input.keys.down {
                mass.velocity.y = mass.velocity.y + impulse;
            }
        }
    }

    /// The selection currently held, if any.
    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            GrabState::Holding(selection) => Some(selection),
            GrabState::Idle => None,
        }
    }

    /// The most recent selection, retained after release for on-screen
    /// diagnostics.
    pub fn last_selection(&self) -> Option<Selection> {
        self.last_selection
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, GrabState::Holding(_))
    }
}

impl<F: Float> Default for GrabController<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan bodies in insertion order, masses in body order; first hit wins.
/// An empty world simply reports no hit.
fn hit_test<F: Float>(world: &World<F>, point: Vec2<F>) -> Option<Selection> {
    for (index, body) in world.bodies().iter().enumerate() {
        for &mass in body.masses() {
            if world.mass(mass).contains_point(point) {
                return Some(Selection { body: Some(BodyId(index)), mass });
            }
        }
    }
    None
}
