//! Error types for handle validation.

use core::fmt;

/// Errors that can occur when resolving handles against a world.
///
/// The force law and the topology builders are total (degenerate
/// parameters yield empty bodies, never failures); only the manual
/// wiring surface can be handed a stale or foreign handle.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass handle is out of bounds for this world.
    MassOutOfBounds { index: usize, count: usize },
    /// Body handle is out of bounds for this world.
    BodyOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::MassOutOfBounds { index, count } => {
                write!(f, "mass handle {} out of bounds (count: {})", index, count)
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body handle {} out of bounds (count: {})", index, count)
            }
        }
    }
}
