use twine_core::Observer;

use super::{
    Action, Config, DesignVariable, DifferentiableModel, Error, Event, GradientProblem, Solution,
    Status,
    design_variable::project,
    evaluate::{Evaluation, evaluate},
};

/// Core projected gradient search.
///
/// `sign` scales the objective before comparison, allowing the same
/// algorithm to handle both minimization (`1.0`) and maximization (`-1.0`).
pub(super) fn search<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    bounds: &[DesignVariable; N],
    config: &Config,
    mut observer: Obs,
    sign: f64,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let start = project(x0, bounds);
    if start != x0 {
        log::warn!("start point {x0:?} clamped into bounds as {start:?}");
    }

    let mut current = evaluate(model, problem, start, sign)?;

    for iter in 1..=config.max_iters {
        let stationarity = norm(&sub(
            &project(sub(&current.x, &current.gradient), bounds),
            &current.x,
        ));
        if stationarity <= config.gradient_tol.get() {
            log::debug!("converged after {} iterations: ‖Pg‖ = {stationarity:.3e}", iter - 1);
            return Ok(into_solution(current, Status::Converged, iter - 1, sign));
        }

        let Some(next) = line_search(model, problem, &current, bounds, config, sign)? else {
            log::warn!(
                "line search failed at iteration {iter}, x = {:?}, ‖Pg‖ = {stationarity:.3e}",
                current.x
            );
            return Ok(into_solution(current, Status::LineSearchFailed, iter - 1, sign));
        };

        let step = norm(&sub(&next.x, &current.x));
        let decrease = current.objective - next.objective;
        log::debug!(
            "iter {iter}: objective = {:.10e}, step = {step:.3e}, ‖Pg‖ = {stationarity:.3e}",
            sign * next.objective
        );

        current = next;

        let event = Event {
            iter,
            x: &current.x,
            objective: sign * current.objective,
            gradient: current.gradient.map(|g| sign * g),
            snapshot: &current.snapshot,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("stopped by observer after {iter} iterations");
            return Ok(into_solution(current, Status::StoppedByObserver, iter, sign));
        }

        if decrease <= config.objective_tol.get() * (1.0 + current.objective.abs()) {
            log::debug!("converged after {iter} iterations: decrease = {decrease:.3e}");
            return Ok(into_solution(current, Status::Converged, iter, sign));
        }
    }

    Ok(into_solution(current, Status::MaxIters, config.max_iters, sign))
}

/// Backtracks along the projected steepest-descent path until the Armijo
/// condition holds.
///
/// Returns `None` if no trial step is accepted, either because
/// `max_backtracks` ran out or because the step shrank to `step_tol`.
fn line_search<M, P, const N: usize>(
    model: &M,
    problem: &P,
    current: &Evaluation<M::Input, M::Output, N>,
    bounds: &[DesignVariable; N],
    config: &Config,
    sign: f64,
) -> Result<Option<Evaluation<M::Input, M::Output, N>>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
{
    let mut alpha = config.initial_step.get();

    for _ in 0..=config.max_backtracks {
        let trial_x = project(
            std::array::from_fn(|i| current.x[i] - alpha * current.gradient[i]),
            bounds,
        );
        let delta = sub(&trial_x, &current.x);
        if norm(&delta) <= config.step_tol.get() {
            return Ok(None);
        }

        let trial = evaluate(model, problem, trial_x, sign)?;
        let decrease = config.armijo.get() * dot(&current.gradient, &delta);

        log::trace!(
            "alpha = {alpha:.3e}: f = {:.10e}, required ≤ {:.10e}",
            trial.objective,
            current.objective + decrease
        );

        if trial.objective <= current.objective + decrease {
            return Ok(Some(trial));
        }

        alpha *= config.backtrack.get();
    }

    Ok(None)
}

fn into_solution<I, O, const N: usize>(
    eval: Evaluation<I, O, N>,
    status: Status,
    iters: usize,
    sign: f64,
) -> Solution<I, O, N> {
    Solution {
        status,
        x: eval.x,
        objective: sign * eval.objective,
        gradient: eval.gradient.map(|g| sign * g),
        snapshot: eval.snapshot,
        iters,
    }
}

fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    dot(v, v).sqrt()
}
