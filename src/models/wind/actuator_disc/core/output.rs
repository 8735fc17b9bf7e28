use uom::{
    ConstZero,
    si::{
        f64::{Force, Power, Ratio, Velocity},
        force::newton,
        power::watt,
        ratio::ratio,
        velocity::meter_per_second,
    },
};

use super::OutputVar;

/// Outputs of the actuator disc model.
///
/// The default is all zeros, the state before any evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    /// Air velocity at the rotor exit plane.
    pub rotor_velocity: Velocity,

    /// Slipstream air velocity, downstream of the rotor.
    pub downstream_velocity: Velocity,

    /// Thrust coefficient `Ct`.
    pub thrust_coefficient: Ratio,

    /// Thrust produced by the rotor.
    pub thrust: Force,

    /// Power coefficient `Cp`.
    pub power_coefficient: Ratio,

    /// Power produced by the rotor.
    pub power: Power,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            rotor_velocity: Velocity::ZERO,
            downstream_velocity: Velocity::ZERO,
            thrust_coefficient: Ratio::ZERO,
            thrust: Force::ZERO,
            power_coefficient: Ratio::ZERO,
            power: Power::ZERO,
        }
    }
}

impl Output {
    /// Constructs an output from SI values ordered as [`OutputVar::ALL`].
    #[must_use]
    pub fn from_si(values: [f64; OutputVar::COUNT]) -> Self {
        let [vr, vd, ct, thrust, cp, power] = values;
        Self {
            rotor_velocity: Velocity::new::<meter_per_second>(vr),
            downstream_velocity: Velocity::new::<meter_per_second>(vd),
            thrust_coefficient: Ratio::new::<ratio>(ct),
            thrust: Force::new::<newton>(thrust),
            power_coefficient: Ratio::new::<ratio>(cp),
            power: Power::new::<watt>(power),
        }
    }

    /// Returns SI values ordered as [`OutputVar::ALL`].
    #[must_use]
    pub fn to_si(&self) -> [f64; OutputVar::COUNT] {
        OutputVar::ALL.map(|var| self.get(var))
    }

    /// Returns the SI value of a single variable.
    #[must_use]
    pub fn get(&self, var: OutputVar) -> f64 {
        match var {
            OutputVar::RotorVelocity => self.rotor_velocity.get::<meter_per_second>(),
            OutputVar::DownstreamVelocity => self.downstream_velocity.get::<meter_per_second>(),
            OutputVar::ThrustCoefficient => self.thrust_coefficient.get::<ratio>(),
            OutputVar::Thrust => self.thrust.get::<newton>(),
            OutputVar::PowerCoefficient => self.power_coefficient.get::<ratio>(),
            OutputVar::Power => self.power.get::<watt>(),
        }
    }
}
