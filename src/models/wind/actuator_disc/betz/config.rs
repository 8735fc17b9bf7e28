use twine_solvers::equation::bisection;

use crate::support::{
    constraint::{Constrained, NonNegative, UnitIntervalUpperOpen},
    optimize,
};

/// Configuration for the Betz-limit solves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetzConfig {
    /// Gradient optimizer settings for [`BetzLimit::solve`](super::BetzLimit::solve).
    pub optimizer: optimize::Config,

    /// Starting induced velocity factor for the optimizer.
    ///
    /// `a = 1` is excluded: `∂Cp/∂a` vanishes there at a minimum of `Cp`.
    pub initial_induction: Constrained<f64, UnitIntervalUpperOpen>,

    /// Maximum iteration count for the bisection cross-check.
    pub max_iters: usize,

    /// Absolute tolerance on the induced velocity factor during bisection.
    pub induction_tol: Constrained<f64, NonNegative>,

    /// Absolute tolerance on `∂Cp/∂a` during bisection.
    pub slope_tol: Constrained<f64, NonNegative>,
}

impl Default for BetzConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self {
            optimizer: optimize::Config::default(),
            initial_induction: UnitIntervalUpperOpen::new(0.5).unwrap(),
            max_iters: 100,
            induction_tol: NonNegative::new(1e-12).unwrap(),
            slope_tol: NonNegative::new(1e-12).unwrap(),
        }
    }
}

impl BetzConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.induction_tol.get(),
            x_rel_tol: 0.0,
            residual_tol: self.slope_tol.get(),
        }
    }
}
