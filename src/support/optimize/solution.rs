use twine_core::Snapshot;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// No trial step produced sufficient decrease.
    LineSearchFailed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a gradient-based optimization.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best design-variable values found.
    pub x: [f64; N],

    /// Objective value at `x`, in the problem's original sign.
    pub objective: f64,

    /// Objective gradient at `x`, in the problem's original sign.
    pub gradient: [f64; N],

    /// Model input and output at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of accepted steps.
    pub iters: usize,
}
