use crate::support::constraint::{
    Constrained, NonNegative, StrictlyPositive, UnitIntervalOpen,
};

/// Configuration for the projected gradient solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of accepted steps.
    pub max_iters: usize,

    /// Projected-gradient norm at which the solver reports convergence.
    pub gradient_tol: Constrained<f64, NonNegative>,

    /// Trial step length (in design-variable space) at or below which the
    /// line search gives up.
    pub step_tol: Constrained<f64, NonNegative>,

    /// Relative objective decrease below which an accepted step counts as
    /// converged: `f_prev - f ≤ objective_tol · (1 + |f|)`.
    pub objective_tol: Constrained<f64, NonNegative>,

    /// Initial step multiplier `α` tried at each iteration.
    pub initial_step: Constrained<f64, StrictlyPositive>,

    /// Armijo sufficient-decrease coefficient.
    pub armijo: Constrained<f64, UnitIntervalOpen>,

    /// Factor applied to `α` after each rejected trial step.
    pub backtrack: Constrained<f64, UnitIntervalOpen>,

    /// Maximum rejected trial steps per iteration.
    pub max_backtracks: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self {
            max_iters: 200,
            gradient_tol: NonNegative::new(1e-10).unwrap(),
            step_tol: NonNegative::new(1e-14).unwrap(),
            objective_tol: NonNegative::new(1e-14).unwrap(),
            initial_step: StrictlyPositive::new(1.0).unwrap(),
            armijo: UnitIntervalOpen::new(1e-4).unwrap(),
            backtrack: UnitIntervalOpen::new(0.5).unwrap(),
            max_backtracks: 60,
        }
    }
}
