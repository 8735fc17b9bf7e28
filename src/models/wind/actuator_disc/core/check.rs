//! Finite-difference verification of the analytic partials.

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Input, InputVar, OutputVar, Partials, compute, partials};

/// Finite-difference form used to approximate each derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Form {
    /// `(f(x + h) - f(x)) / h`
    Forward,
    /// `(f(x) - f(x - h)) / h`
    Backward,
    /// `(f(x + h) - f(x - h)) / 2h`
    #[default]
    Central,
}

/// Configuration for [`check_partials`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckConfig {
    /// Absolute perturbation applied to each input, in SI units.
    pub step: Constrained<f64, StrictlyPositive>,

    pub form: Form,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            // Known-good value, unwrap is safe
            step: StrictlyPositive::new(1e-6).unwrap(),
            form: Form::Central,
        }
    }
}

/// Comparison of one analytic partial against its finite-difference estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialCheck {
    pub of: OutputVar,
    pub wrt: InputVar,

    /// Whether the pair is in [`Partials::DECLARED`].
    ///
    /// Undeclared pairs have an analytic value of zero.
    pub declared: bool,

    pub analytic: f64,
    pub finite_difference: f64,

    /// `|analytic - finite_difference|`
    pub abs_error: f64,

    /// `abs_error / |finite_difference|`, or `abs_error` when the finite
    /// difference is exactly zero.
    pub rel_error: f64,
}

/// Results of checking every output/input pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialsCheck {
    /// One entry per pair, ordered by output then input.
    pub entries: Vec<PartialCheck>,
}

impl PartialsCheck {
    /// Returns the entry for `(of, wrt)`.
    #[must_use]
    pub fn get(&self, of: OutputVar, wrt: InputVar) -> Option<&PartialCheck> {
        self.entries.iter().find(|e| e.of == of && e.wrt == wrt)
    }

    /// Returns the entry with the largest absolute error.
    #[must_use]
    pub fn worst(&self) -> Option<&PartialCheck> {
        self.entries
            .iter()
            .max_by(|a, b| a.abs_error.total_cmp(&b.abs_error))
    }

    /// Returns `true` if every entry satisfies `abs_error ≤ atol` or
    /// `rel_error ≤ rtol`.
    #[must_use]
    pub fn passes(&self, atol: f64, rtol: f64) -> bool {
        self.entries
            .iter()
            .all(|e| e.abs_error <= atol || e.rel_error <= rtol)
    }
}

/// Compares the analytic partials at `input` with finite differences of
/// the forward evaluation.
#[must_use]
pub fn check_partials(input: &Input, config: &CheckConfig) -> PartialsCheck {
    compare(input, &partials(input), config)
}

/// Compares `analytic` with finite differences of the forward evaluation
/// at `input`.
fn compare(input: &Input, analytic: &Partials, config: &CheckConfig) -> PartialsCheck {
    let h = config.step.get();

    let mut entries = Vec::with_capacity(InputVar::COUNT * OutputVar::COUNT);
    let columns = InputVar::ALL.map(|wrt| column(input, wrt, h, config.form));

    for of in OutputVar::ALL {
        for wrt in InputVar::ALL {
            let analytic = analytic.get(of, wrt);
            let finite_difference = columns[wrt.index()][of.index()];
            let abs_error = (analytic - finite_difference).abs();
            let rel_error = if finite_difference == 0.0 {
                abs_error
            } else {
                abs_error / finite_difference.abs()
            };

            entries.push(PartialCheck {
                of,
                wrt,
                declared: Partials::is_declared(of, wrt),
                analytic,
                finite_difference,
                abs_error,
                rel_error,
            });
        }
    }

    let check = PartialsCheck { entries };
    if let Some(worst) = check.worst() {
        log::debug!(
            "partials check: worst ∂{}/∂{} abs_error = {:.3e}",
            worst.of,
            worst.wrt,
            worst.abs_error
        );
    }
    check
}

/// Estimates `∂output/∂wrt` for every output.
fn column(input: &Input, wrt: InputVar, h: f64, form: Form) -> [f64; OutputVar::COUNT] {
    let x = input.get(wrt);
    let eval = |value: f64| compute(&input.with(wrt, value)).to_si();

    let (hi, lo, span) = match form {
        Form::Forward => (eval(x + h), eval(x), h),
        Form::Backward => (eval(x), eval(x - h), h),
        Form::Central => (eval(x + h), eval(x - h), 2.0 * h),
    };

    std::array::from_fn(|i| (hi[i] - lo[i]) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn analytic_matches_central_differences() {
        let samples = [
            Input::default(),
            Input::from_si([1.0 / 3.0, 10.0, 1.225, 10.0]),
            Input::from_si([0.1, 120.0, 1.0, 6.0]),
            Input::from_si([0.75, 0.5, 1.3, 20.0]),
        ];

        for input in samples {
            let check = check_partials(&input, &CheckConfig::default());

            assert_eq!(check.entries.len(), InputVar::COUNT * OutputVar::COUNT);
            for entry in &check.entries {
                assert!(
                    entry.abs_error <= 1e-6 * (1.0 + entry.analytic.abs()),
                    "∂{}/∂{}: analytic {} vs fd {}",
                    entry.of,
                    entry.wrt,
                    entry.analytic,
                    entry.finite_difference,
                );
            }
            assert!(check.passes(1e-6, 1e-6));
        }
    }

    #[test]
    fn undeclared_pairs_have_no_sensitivity() {
        let input = Input::from_si([0.3, 12.0, 1.1, 9.0]);
        let check = check_partials(&input, &CheckConfig::default());

        for entry in check.entries.iter().filter(|e| !e.declared) {
            assert_eq!(entry.analytic, 0.0);
            assert_eq!(entry.finite_difference, 0.0, "∂{}/∂{}", entry.of, entry.wrt);
        }
    }

    #[test]
    fn one_sided_forms_are_first_order() {
        let input = Input::default();
        let config = CheckConfig {
            step: StrictlyPositive::new(1e-4).unwrap(),
            form: Form::Forward,
        };

        let forward = check_partials(&input, &config);
        let backward = check_partials(
            &input,
            &CheckConfig {
                form: Form::Backward,
                ..config
            },
        );

        let fwd = forward
            .get(OutputVar::Power, InputVar::UpstreamVelocity)
            .unwrap();
        let bwd = backward
            .get(OutputVar::Power, InputVar::UpstreamVelocity)
            .unwrap();

        // power ∝ Vu³ is convex in Vu, so forward overestimates and backward
        // underestimates the slope.
        assert!(fwd.finite_difference > fwd.analytic);
        assert!(bwd.finite_difference < bwd.analytic);
        assert!(fwd.rel_error < 1e-4);
        assert!(bwd.rel_error < 1e-4);
    }

    #[test]
    fn detects_a_wrong_analytic_partial() {
        let input = Input::default();
        let mut jacobian = partials(&input);

        // Drop the factor of 2 from ∂Vd/∂a = -2 Vu.
        let correct = jacobian.get(OutputVar::DownstreamVelocity, InputVar::Induction);
        jacobian.set(OutputVar::DownstreamVelocity, InputVar::Induction, correct / 2.0);

        let check = compare(&input, &jacobian, &CheckConfig::default());
        assert!(!check.passes(1e-6, 1e-6));

        let worst = check.worst().unwrap();
        assert_eq!(
            (worst.of, worst.wrt),
            (OutputVar::DownstreamVelocity, InputVar::Induction)
        );
        assert_relative_eq!(worst.finite_difference, correct, max_relative = 1e-8);
        assert_relative_eq!(worst.abs_error, 10.0, max_relative = 1e-6);
        assert_relative_eq!(worst.rel_error, 0.5, max_relative = 1e-6);

        let others_pass = check
            .entries
            .iter()
            .filter(|e| (e.of, e.wrt) != (worst.of, worst.wrt))
            .all(|e| e.abs_error <= 1e-6 || e.rel_error <= 1e-6);
        assert!(others_pass);
    }
}
