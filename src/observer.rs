//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor the step pipeline (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after every body's spring pass has run for the frame.
    fn on_springs_applied(&mut self) {}

    /// Called after the world-wide integration pass.
    fn on_integrate(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
