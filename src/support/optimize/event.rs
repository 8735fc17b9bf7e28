use twine_core::Snapshot;

/// Event emitted by the projected gradient solver after each accepted step.
///
/// `objective` and `gradient` are reported in the problem's original sign,
/// regardless of whether the solver is minimizing or maximizing.
#[derive(Debug)]
pub struct Event<'a, I, O, const N: usize> {
    /// Iteration that produced this point.
    pub iter: usize,

    /// Accepted design-variable values.
    pub x: &'a [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Objective gradient at `x`.
    pub gradient: [f64; N],

    /// Model input and output at `x`.
    pub snapshot: &'a Snapshot<I, O>,
}
