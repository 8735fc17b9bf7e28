use super::{InputVar, OutputVar};

/// Analytic Jacobian of the actuator disc outputs with respect to its inputs.
///
/// Entries are in SI units (e.g., `∂thrust/∂Area` in N/m²). Only the pairs in
/// [`Partials::DECLARED`] are ever non-zero; every other entry is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partials {
    values: [[f64; InputVar::COUNT]; OutputVar::COUNT],
}

impl Partials {
    /// Output/input pairs with non-zero sensitivity.
    pub const DECLARED: [(OutputVar, InputVar); 14] = [
        (OutputVar::RotorVelocity, InputVar::Induction),
        (OutputVar::RotorVelocity, InputVar::UpstreamVelocity),
        (OutputVar::DownstreamVelocity, InputVar::Induction),
        (OutputVar::DownstreamVelocity, InputVar::UpstreamVelocity),
        (OutputVar::ThrustCoefficient, InputVar::Induction),
        (OutputVar::Thrust, InputVar::Induction),
        (OutputVar::Thrust, InputVar::Area),
        (OutputVar::Thrust, InputVar::Density),
        (OutputVar::Thrust, InputVar::UpstreamVelocity),
        (OutputVar::PowerCoefficient, InputVar::Induction),
        (OutputVar::Power, InputVar::Induction),
        (OutputVar::Power, InputVar::Area),
        (OutputVar::Power, InputVar::Density),
        (OutputVar::Power, InputVar::UpstreamVelocity),
    ];

    pub(super) fn zeros() -> Self {
        Self {
            values: [[0.0; InputVar::COUNT]; OutputVar::COUNT],
        }
    }

    /// Returns `∂of/∂wrt`.
    #[must_use]
    pub fn get(&self, of: OutputVar, wrt: InputVar) -> f64 {
        self.values[of.index()][wrt.index()]
    }

    /// Returns `true` if `(of, wrt)` is a declared non-zero pair.
    #[must_use]
    pub fn is_declared(of: OutputVar, wrt: InputVar) -> bool {
        Self::DECLARED.contains(&(of, wrt))
    }

    /// Iterates over the declared pairs and their values.
    pub fn declared(&self) -> impl Iterator<Item = (OutputVar, InputVar, f64)> + '_ {
        Self::DECLARED
            .iter()
            .map(|&(of, wrt)| (of, wrt, self.get(of, wrt)))
    }

    pub(super) fn set(&mut self, of: OutputVar, wrt: InputVar, value: f64) {
        debug_assert!(
            Self::is_declared(of, wrt),
            "setting undeclared partial ∂{of}/∂{wrt}"
        );
        self.values[of.index()][wrt.index()] = value;
    }
}
