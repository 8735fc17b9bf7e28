//! Bounded gradient-based optimization.
//!
//! # Algorithm
//!
//! Projected gradient descent with Armijo backtracking. Each iteration takes
//! a trial step `x - α∇f` from the current point, projects it onto the
//! design-variable box, and shrinks `α` until the objective decreases
//! sufficiently:
//!
//! ```text
//! f(P(x - α∇f)) ≤ f(x) + c · ∇f · (P(x - α∇f) - x)
//! ```
//!
//! where `P` clamps each component into its bounds and `c` is the Armijo
//! coefficient.
//!
//! # Convergence
//!
//! The solver reports [`Status::Converged`] when either:
//!
//! - the projected gradient `‖P(x - ∇f) - x‖` falls to `gradient_tol`, which
//!   is the first-order optimality condition for a box-constrained problem, or
//! - an accepted step decreases the objective by no more than
//!   `objective_tol · (1 + |f|)`. Near a smooth optimum the Armijo test
//!   eventually compares values that differ by less than round-off, so this
//!   test stops the search before that point.
//!
//! Trial steps no longer than `step_tol` are never evaluated. If backtracking
//! shrinks the step to that length, or exhausts `max_backtracks`, before
//! sufficient decrease is found, the solver stops with
//! [`Status::LineSearchFailed`] and returns the best point so far.
//!
//! # Observer Events
//!
//! After each accepted step the observer receives an [`Event`] with the new
//! point, its objective and gradient in the problem's original sign, and the
//! model snapshot. Returning [`Action::StopEarly`] stops the search with
//! [`Status::StoppedByObserver`]. Use the `*_unobserved` variants when no
//! observer is needed.
//!
//! # Gradients
//!
//! Gradients come from the model's analytic Jacobian through
//! [`DifferentiableModel::partials`], mapped to design-variable space by
//! [`GradientProblem::gradient`]. No finite differencing happens here.

mod action;
mod config;
mod design_variable;
mod error;
mod evaluate;
mod event;
mod problem;
mod search;
mod solution;


pub use action::Action;
pub use config::Config;
pub use design_variable::{DesignVariable, DesignVariableError};
pub use error::Error;
pub use event::Event;
pub use problem::{DifferentiableModel, GradientProblem};
pub use solution::{Solution, Status};

use twine_core::Observer;

use search::search;

/// Finds a minimum of the objective within the design-variable bounds.
///
/// The starting point `x0` is clamped into `bounds` before the first
/// evaluation. The observer receives an [`Event`] after each accepted step.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation, or if
/// the objective or gradient at an evaluated point is not finite.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: &[DesignVariable; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    search(model, problem, x0, bounds, config, observer, 1.0)
}

/// Finds a minimum of the objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: &[DesignVariable; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
{
    minimize(model, problem, x0, bounds, config, ())
}

/// Finds a maximum of the objective within the design-variable bounds.
///
/// Equivalent to minimizing the objective scaled by `-1`. The reported
/// [`Solution::objective`] and every [`Event`] keep the problem's original
/// sign.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation, or if
/// the objective or gradient at an evaluated point is not finite.
pub fn maximize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: &[DesignVariable; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    search(model, problem, x0, bounds, config, observer, -1.0)
}

/// Finds a maximum of the objective without observer support.
///
/// # Errors
///
/// See [`maximize`].
pub fn maximize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: &[DesignVariable; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
{
    maximize(model, problem, x0, bounds, config, ())
}
