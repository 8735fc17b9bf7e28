//! Problem formulations for the Betz-limit solves.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    area::square_meter,
    f64::{Area, Ratio},
    ratio::ratio,
};

use crate::support::optimize::{DifferentiableModel, GradientProblem};

use super::super::{ActuatorDisc, Input, InputVar, Output, OutputVar, Partials};

/// Maximizes the power coefficient over the induced velocity factor and
/// rotor area.
///
/// Design variables are `x = [a, Area]`. Density and upstream velocity are
/// taken from the ambient input.
pub(super) struct BetzProblem {
    ambient: Input,
}

impl BetzProblem {
    pub(super) fn new(ambient: Input) -> Self {
        Self { ambient }
    }
}

impl GradientProblem<2> for BetzProblem {
    type Input = Input;
    type Output = Output;
    type Jacobian = Partials;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(Input {
            induction: Ratio::new::<ratio>(x[0]),
            area: Area::new::<square_meter>(x[1]),
            ..self.ambient
        })
    }

    fn objective(&self, _input: &Input, output: &Output) -> Result<f64, Self::Error> {
        Ok(output.power_coefficient.get::<ratio>())
    }

    fn gradient(
        &self,
        _input: &Input,
        _output: &Output,
        jacobian: &Partials,
    ) -> Result<[f64; 2], Self::Error> {
        Ok([
            jacobian.get(OutputVar::PowerCoefficient, InputVar::Induction),
            jacobian.get(OutputVar::PowerCoefficient, InputVar::Area),
        ])
    }
}

/// A model evaluation along with the power coefficient slope `∂Cp/∂a`.
#[derive(Debug, Clone, Copy)]
pub(super) struct SlopeEvaluation {
    pub(super) input: Input,
    pub(super) output: Output,
    pub(super) slope: f64,
}

/// Model adapter exposing the induced velocity factor as the sole input.
pub(super) struct SlopeModel<'a> {
    ambient: &'a Input,
}

impl<'a> SlopeModel<'a> {
    pub(super) fn new(ambient: &'a Input) -> Self {
        Self { ambient }
    }
}

impl Model for SlopeModel<'_> {
    type Input = Ratio;
    type Output = SlopeEvaluation;
    type Error = Infallible;

    fn call(&self, induction: &Ratio) -> Result<Self::Output, Self::Error> {
        let input = Input {
            induction: *induction,
            ..*self.ambient
        };
        let output = ActuatorDisc.call(&input)?;
        let slope = ActuatorDisc
            .partials(&input)?
            .get(OutputVar::PowerCoefficient, InputVar::Induction);

        Ok(SlopeEvaluation {
            input,
            output,
            slope,
        })
    }
}

/// Equation problem whose root is the stationary point `∂Cp/∂a = 0`.
pub(super) struct SlopeProblem;

impl EquationProblem<1> for SlopeProblem {
    type Input = Ratio;
    type Output = SlopeEvaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Ratio::new::<ratio>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.slope])
    }
}
