//! Interactive 2D mass-spring simulation for games and toys.
//!
//! `springy` simulates graphs of point masses joined by damped vector springs:
//! each spring restores the *signed displacement* between its endpoints toward
//! the offset captured at construction time, so a pair resists shear and
//! rotation, not merely stretch. Masses live in a [`World`] arena and are
//! addressed by stable handles; bodies and springs hold handles, never masses.
//!
//! # Features
//!
//! - **Vector springs**: rest *offset*, not rest length — no normalization,
//!   no divisions, total for any input including degenerate self-loops
//! - **Topology builders**: rings with optional hubs, hanging chains,
//!   rectangular frames, and cloth grids
//! - **Pointer grab**: a kinematic pin override driven by per-frame input
//!   samples, plus directional-key impulses on a designated anchor mass
//! - **Observable**: monitor simulation steps via the [`StepObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod mass;
pub mod spring;
pub mod body;
pub mod world;
pub mod ring;
pub mod chain;
pub mod frame;
pub mod grid;
pub mod grab;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use mass::Mass;
pub use spring::{Spring, DampingMode};
pub use body::Body;
pub use world::{World, MassId, BodyId, MassSnapshot, SpringSnapshot};
pub use ring::RingConfig;
pub use chain::ChainConfig;
pub use frame::FrameConfig;
pub use grid::GridConfig;
pub use grab::{GrabController, InputSample, HeldKeys, Selection};
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
