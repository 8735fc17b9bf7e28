use twine_core::Snapshot;

use super::{DifferentiableModel, Error, GradientProblem};

/// A fully evaluated design point.
///
/// `objective` and `gradient` are already scaled by the search direction
/// sign, so the search always minimizes.
pub(super) struct Evaluation<I, O, const N: usize> {
    pub(super) x: [f64; N],
    pub(super) objective: f64,
    pub(super) gradient: [f64; N],
    pub(super) snapshot: Snapshot<I, O>,
}

/// Maps `x` to a model input, calls the model and its partials, then computes
/// the scaled objective and gradient.
pub(super) fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    sign: f64,
) -> Result<Evaluation<M::Input, M::Output, N>, Error>
where
    M: DifferentiableModel,
    M::Error: std::error::Error + Send + Sync + 'static,
    P: GradientProblem<N, Input = M::Input, Output = M::Output, Jacobian = M::Jacobian>,
{
    let input = problem.input(&x).map_err(|e| Error::Problem(Box::new(e)))?;
    let output = model.call(&input).map_err(|e| Error::Model(Box::new(e)))?;
    let jacobian = model
        .partials(&input)
        .map_err(|e| Error::Model(Box::new(e)))?;

    let objective = problem
        .objective(&input, &output)
        .map_err(|e| Error::Problem(Box::new(e)))?;
    let gradient = problem
        .gradient(&input, &output, &jacobian)
        .map_err(|e| Error::Problem(Box::new(e)))?;

    if !objective.is_finite() || gradient.iter().any(|g| !g.is_finite()) {
        return Err(Error::NonFinite { x: x.to_vec() });
    }

    Ok(Evaluation {
        x,
        objective: sign * objective,
        gradient: gradient.map(|g| sign * g),
        snapshot: Snapshot::new(input, output),
    })
}
