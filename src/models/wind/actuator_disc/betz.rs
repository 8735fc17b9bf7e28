//! The Betz limit: the maximum power coefficient of an ideal rotor.
//!
//! Maximizing `Cp = 4a(1 - a)²` gives `a = 1/3` and `Cp = 16/27`. This
//! module solves the problem two ways:
//!
//! - [`BetzLimit::solve`] runs the bounded gradient optimizer over the
//!   induced velocity factor and rotor area, driven by the analytic Jacobian.
//! - [`BetzLimit::stationary_induction`] bisects `∂Cp/∂a = 0` directly.

mod config;
mod error;
mod problem;

pub use config::BetzConfig;
pub use error::BetzError;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{MassDensity, Velocity},
    ratio::ratio,
};

use crate::support::optimize::{self, DesignVariable, Solution, Status};

use super::{ActuatorDisc, Input, InputVar, Output};

use problem::{BetzProblem, SlopeModel, SlopeProblem};

/// The analytical maximum power coefficient, `16/27`.
pub const BETZ_LIMIT: f64 = 16.0 / 27.0;

/// The bisection bracket for `a`.
///
/// `∂Cp/∂a` is `4` at `a = 0` and `-1` at `a = 0.5`, with a single root between.
const SLOPE_BRACKET: [f64; 2] = [0.0, 0.5];

/// Result of the stationary-point solve.
#[derive(Debug, Clone, Copy)]
pub struct StationaryPoint {
    /// Model input at the stationary point.
    pub input: Input,

    /// Model output at the stationary point.
    pub output: Output,

    /// Remaining `∂Cp/∂a` at the reported input.
    pub slope: f64,

    /// Bisection iteration count.
    pub iters: usize,
}

/// Betz-limit problem for an actuator disc.
///
/// Design variables are the induced velocity factor `a ∈ [0, 1]` and the
/// rotor area `Area ∈ [0, 1]` m². Density and upstream velocity are held at
/// the ambient values (model defaults unless set with
/// [`BetzLimit::with_ambient`]). The objective is `Cp`, maximized.
#[derive(Debug, Clone, Copy)]
pub struct BetzLimit {
    config: BetzConfig,
    ambient: Input,
}

impl Default for BetzLimit {
    fn default() -> Self {
        Self::new(BetzConfig::default())
    }
}

impl BetzLimit {
    #[must_use]
    pub fn new(config: BetzConfig) -> Self {
        Self {
            config,
            ambient: Input::default(),
        }
    }

    /// Sets the fixed air density and upstream velocity.
    #[must_use]
    pub fn with_ambient(self, density: MassDensity, upstream_velocity: Velocity) -> Self {
        Self {
            ambient: Input {
                density,
                upstream_velocity,
                ..self.ambient
            },
            ..self
        }
    }

    /// Bounds on `[a, Area]`.
    #[must_use]
    pub fn design_variables() -> [DesignVariable; 2] {
        // Known-good bounds, unwrap is safe
        let unit = DesignVariable::new(0.0, 1.0).unwrap();
        [unit, unit]
    }

    /// Maximizes `Cp` with the gradient optimizer.
    ///
    /// The search starts from the configured induction and the ambient rotor
    /// area clamped into its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BetzError::Optimize`] if an evaluation fails, or
    /// [`BetzError::NotConverged`] if the optimizer stops without converging.
    pub fn solve(&self) -> Result<Solution<Input, Output, 2>, BetzError> {
        let bounds = Self::design_variables();
        let problem = BetzProblem::new(self.ambient);

        let x0 = [
            self.config.initial_induction.get(),
            bounds[1].clamp(self.ambient.get(InputVar::Area)),
        ];

        let solution = optimize::maximize_unobserved(
            &ActuatorDisc,
            &problem,
            x0,
            &bounds,
            &self.config.optimizer,
        )?;

        if solution.status != Status::Converged {
            return Err(BetzError::NotConverged {
                status: solution.status,
                iters: solution.iters,
            });
        }

        log::debug!(
            "Betz optimum: a = {:.8}, Cp = {:.8} after {} iterations",
            solution.snapshot.input.induction.get::<ratio>(),
            solution.objective,
            solution.iters
        );

        Ok(solution)
    }

    /// Finds the induced velocity factor where `∂Cp/∂a = 0` by bisection.
    ///
    /// # Errors
    ///
    /// Returns [`BetzError::Bisection`] if the solver fails, or
    /// [`BetzError::MaxIters`] if it does not converge.
    pub fn stationary_induction(&self) -> Result<StationaryPoint, BetzError> {
        let model = SlopeModel::new(&self.ambient);

        let solution = bisection::solve(
            &model,
            &SlopeProblem,
            SLOPE_BRACKET,
            &self.config.bisection(),
            |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(BetzError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            });
        }

        let eval = solution.snapshot.output;
        Ok(StationaryPoint {
            input: eval.input,
            output: eval.output,
            slope: eval.slope,
            iters: solution.iters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, mass_density::kilogram_per_cubic_meter, velocity::meter_per_second,
    };

    use crate::support::constraint::{
        ConstraintError, StrictlyPositive, UnitIntervalUpperOpen,
    };

    #[test]
    fn optimizer_reaches_betz_limit() {
        let solution = BetzLimit::default().solve().expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.objective, BETZ_LIMIT, max_relative = 1e-4);
        assert_relative_eq!(
            solution.snapshot.output.power_coefficient.get::<ratio>(),
            BETZ_LIMIT,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            solution.snapshot.input.induction.get::<ratio>(),
            1.0 / 3.0,
            epsilon = 1e-6
        );

        // Cp does not depend on area, so the area stays at its clamped start.
        assert_relative_eq!(solution.snapshot.input.area.get::<square_meter>(), 1.0);
        assert_relative_eq!(solution.gradient[0], 0.0, epsilon = 1e-5);
    }

    #[test]
    fn optimum_is_independent_of_start_and_ambient() {
        let starts = [0.0, 0.1, 0.9, 0.999_999];

        for start in starts {
            let config = BetzConfig {
                initial_induction: UnitIntervalUpperOpen::new(start).unwrap(),
                ..BetzConfig::default()
            };
            let betz = BetzLimit::new(config).with_ambient(
                MassDensity::new::<kilogram_per_cubic_meter>(1.0),
                Velocity::new::<meter_per_second>(7.5),
            );

            let solution = betz.solve().expect("should converge");
            assert_relative_eq!(solution.objective, BETZ_LIMIT, max_relative = 1e-4);
            assert_relative_eq!(
                solution.snapshot.input.density.get::<kilogram_per_cubic_meter>(),
                1.0
            );
        }
    }

    #[test]
    fn bisection_finds_stationary_point() {
        let point = BetzLimit::default()
            .stationary_induction()
            .expect("should converge");

        assert_relative_eq!(point.input.induction.get::<ratio>(), 1.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(
            point.output.power_coefficient.get::<ratio>(),
            BETZ_LIMIT,
            epsilon = 1e-12
        );
        assert!(point.slope.abs() < 1e-9);
    }

    #[test]
    fn both_solves_agree() {
        let betz = BetzLimit::default();

        let optimized = betz.solve().expect("optimizer should converge");
        let stationary = betz.stationary_induction().expect("bisection should converge");

        assert_relative_eq!(
            optimized.snapshot.input.induction.get::<ratio>(),
            stationary.input.induction.get::<ratio>(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn start_at_stationary_minimum_is_rejected() {
        // Cp has zero slope at a = 1, so a search started there never moves.
        assert!(matches!(
            UnitIntervalUpperOpen::new(1.0),
            Err(ConstraintError::AboveMaximum)
        ));
    }

    #[test]
    fn failed_line_search_is_reported() {
        let mut config = BetzConfig::default();
        config.optimizer.initial_step = StrictlyPositive::new(100.0).unwrap();
        config.optimizer.max_backtracks = 0;

        // The only trial step overshoots to a = 0, where Cp = 0.
        let result = BetzLimit::new(config).solve();
        assert!(matches!(
            result,
            Err(BetzError::NotConverged {
                status: Status::LineSearchFailed,
                iters: 0
            })
        ));
    }

    #[test]
    fn iteration_limit_is_reported() {
        let mut config = BetzConfig::default();
        config.optimizer.max_iters = 1;

        let result = BetzLimit::new(config).solve();
        assert!(matches!(
            result,
            Err(BetzError::NotConverged {
                status: Status::MaxIters,
                iters: 1
            })
        ));
    }
}
