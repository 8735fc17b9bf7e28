use uom::si::{
    area::square_meter,
    f64::{Area, MassDensity, Ratio, Velocity},
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    velocity::meter_per_second,
};

use super::InputVar;

/// Inputs to the actuator disc model.
///
/// No constraints are imposed: every combination of real values evaluates,
/// including non-physical ones such as `a > 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    /// Induced velocity factor `a`.
    pub induction: Ratio,

    /// Rotor disc area.
    pub area: Area,

    /// Air density.
    pub density: MassDensity,

    /// Freestream air velocity, upstream of the rotor.
    pub upstream_velocity: Velocity,
}

impl Default for Input {
    fn default() -> Self {
        Self::from_si(InputVar::ALL.map(InputVar::default_value))
    }
}

impl Input {
    /// Constructs an input from SI values ordered as [`InputVar::ALL`].
    #[must_use]
    pub fn from_si(values: [f64; InputVar::COUNT]) -> Self {
        let [a, area, rho, vu] = values;
        Self {
            induction: Ratio::new::<ratio>(a),
            area: Area::new::<square_meter>(area),
            density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
            upstream_velocity: Velocity::new::<meter_per_second>(vu),
        }
    }

    /// Returns SI values ordered as [`InputVar::ALL`].
    #[must_use]
    pub fn to_si(&self) -> [f64; InputVar::COUNT] {
        InputVar::ALL.map(|var| self.get(var))
    }

    /// Returns the SI value of a single variable.
    #[must_use]
    pub fn get(&self, var: InputVar) -> f64 {
        match var {
            InputVar::Induction => self.induction.get::<ratio>(),
            InputVar::Area => self.area.get::<square_meter>(),
            InputVar::Density => self.density.get::<kilogram_per_cubic_meter>(),
            InputVar::UpstreamVelocity => self.upstream_velocity.get::<meter_per_second>(),
        }
    }

    /// Returns a copy with one variable replaced by an SI value.
    #[must_use]
    pub fn with(&self, var: InputVar, value: f64) -> Self {
        let mut values = self.to_si();
        values[var.index()] = value;
        Self::from_si(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let input = Input::default();
        assert_relative_eq!(input.induction.get::<ratio>(), 0.5);
        assert_relative_eq!(input.area.get::<square_meter>(), 10.0);
        assert_relative_eq!(input.density.get::<kilogram_per_cubic_meter>(), 1.225);
        assert_relative_eq!(input.upstream_velocity.get::<meter_per_second>(), 10.0);
    }

    #[test]
    fn with_replaces_one_variable() {
        let input = Input::default().with(InputVar::Density, 1.0);
        assert_eq!(input.to_si(), [0.5, 10.0, 1.0, 10.0]);
    }
}
