use twine_core::Model;

/// A [`Model`] that can also report its analytic partial derivatives.
///
/// The Jacobian type is model-specific. It is consumed by
/// [`GradientProblem::gradient`], which knows how to pick out the entries
/// relevant to its design variables and objective.
pub trait DifferentiableModel: Model {
    /// Partial derivatives of the outputs with respect to the inputs.
    type Jacobian;

    /// Computes the Jacobian at the given input.
    ///
    /// # Errors
    ///
    /// Returns [`Model::Error`] if the derivatives cannot be evaluated.
    fn partials(&self, input: &Self::Input) -> Result<Self::Jacobian, Self::Error>;
}

/// Defines a bounded optimization problem with an analytic gradient.
///
/// The const generic `N` is the number of design variables.
pub trait GradientProblem<const N: usize> {
    type Input;
    type Output;
    type Jacobian;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps design variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes the objective from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;

    /// Computes `∂objective/∂x` from the model Jacobian.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed.
    fn gradient(
        &self,
        input: &Self::Input,
        output: &Self::Output,
        jacobian: &Self::Jacobian,
    ) -> Result<[f64; N], Self::Error>;
}
