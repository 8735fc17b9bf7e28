//! Actuator disc wind turbine model.
//!
//! [`ActuatorDisc`] is the [`twine_core::Model`] adapter. It also implements
//! [`DifferentiableModel`] so gradient-based solvers can use its analytic
//! Jacobian. The computations live in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_wind_models::models::wind::actuator_disc::{ActuatorDisc, Input};
//! use uom::si::{power::watt, ratio::ratio};
//!
//! let output = ActuatorDisc.call(&Input::default()).unwrap();
//!
//! assert_eq!(output.power_coefficient.get::<ratio>(), 0.5);
//! assert!((output.power.get::<watt>() - 3062.5).abs() < 1e-9);
//! ```

mod betz;
mod core;

use std::convert::Infallible;

use twine_core::Model;

use crate::support::optimize::DifferentiableModel;

pub use self::core::{
    CheckConfig, Form, Input, InputVar, Output, OutputVar, PartialCheck, Partials,
    PartialsCheck,
};
pub use betz::{BETZ_LIMIT, BetzConfig, BetzError, BetzLimit, StationaryPoint};

/// Actuator disc model.
///
/// Evaluation is infallible: every input evaluates, even non-physical ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorDisc;

impl ActuatorDisc {
    /// Declared inputs, in evaluation order.
    #[must_use]
    pub fn inputs() -> &'static [InputVar] {
        &InputVar::ALL
    }

    /// Declared outputs, in evaluation order.
    #[must_use]
    pub fn outputs() -> &'static [OutputVar] {
        &OutputVar::ALL
    }

    /// Compares the analytic partials at `input` with finite differences.
    #[must_use]
    pub fn check_partials(&self, input: &Input, config: &CheckConfig) -> PartialsCheck {
        self::core::check_partials(input, config)
    }
}

impl Model for ActuatorDisc {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self::core::compute(input))
    }
}

impl DifferentiableModel for ActuatorDisc {
    type Jacobian = Partials;

    fn partials(&self, input: &Self::Input) -> Result<Self::Jacobian, Self::Error> {
        Ok(self::core::partials(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn declares_variables() {
        let names: Vec<_> = ActuatorDisc::inputs().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["a", "Area", "rho", "Vu"]);

        let names: Vec<_> = ActuatorDisc::outputs().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["Vr", "Vd", "Ct", "thrust", "Cp", "power"]);
    }

    #[test]
    fn model_and_partials_agree_with_finite_differences() {
        let input = Input::from_si([0.5, 10.0, 1.225, 10.0]);

        let check = ActuatorDisc.check_partials(&input, &CheckConfig::default());
        assert!(check.passes(1e-6, 1e-6));

        let jacobian = ActuatorDisc.partials(&input).unwrap();
        for (of, wrt, value) in jacobian.declared() {
            let entry = check.get(of, wrt).unwrap();
            assert_relative_eq!(entry.analytic, value);
        }
    }
}
