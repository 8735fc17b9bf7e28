use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::optimize;

/// Errors that can occur while solving the Betz problem.
#[derive(Debug, Error)]
pub enum BetzError {
    /// The gradient optimizer encountered an error.
    #[error("optimizer error")]
    Optimize(#[from] optimize::Error),

    /// The optimizer stopped without converging.
    #[error("optimizer stopped without converging: {status:?} after {iters} iterations")]
    NotConverged {
        status: optimize::Status,
        iters: usize,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The bisection cross-check reached the iteration limit.
    #[error("bisection hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best `∂Cp/∂a` residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
