//! Named variables of the actuator disc model.
//!
//! Each variable carries its short name, optional unit tag, a human-readable
//! description, and (for inputs) a default value in SI units. Values move in
//! and out of the model in the order of [`InputVar::ALL`] and [`OutputVar::ALL`].

use std::fmt;

/// Model inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputVar {
    /// Induced velocity factor `a`.
    Induction,
    /// Rotor disc area.
    Area,
    /// Air density.
    Density,
    /// Freestream velocity upstream of the rotor.
    UpstreamVelocity,
}

/// Model outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputVar {
    /// Air velocity at the rotor exit plane.
    RotorVelocity,
    /// Slipstream velocity downstream of the rotor.
    DownstreamVelocity,
    ThrustCoefficient,
    Thrust,
    PowerCoefficient,
    Power,
}

impl InputVar {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Induction,
        Self::Area,
        Self::Density,
        Self::UpstreamVelocity,
    ];

    /// Position of this variable in [`InputVar::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Induction => "a",
            Self::Area => "Area",
            Self::Density => "rho",
            Self::UpstreamVelocity => "Vu",
        }
    }

    /// Unit tag, or `None` for dimensionless variables.
    #[must_use]
    pub const fn units(self) -> Option<&'static str> {
        match self {
            Self::Induction => None,
            Self::Area => Some("m**2"),
            Self::Density => Some("kg/m**3"),
            Self::UpstreamVelocity => Some("m/s"),
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Induction => "Induced Velocity Factor",
            Self::Area => "Rotor disc area",
            Self::Density => "air density",
            Self::UpstreamVelocity => "Freestream air velocity, upstream of rotor",
        }
    }

    /// Default value in SI units.
    #[must_use]
    pub const fn default_value(self) -> f64 {
        match self {
            Self::Induction => 0.5,
            Self::Area => 10.0,
            Self::Density => 1.225,
            Self::UpstreamVelocity => 10.0,
        }
    }
}

impl OutputVar {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::RotorVelocity,
        Self::DownstreamVelocity,
        Self::ThrustCoefficient,
        Self::Thrust,
        Self::PowerCoefficient,
        Self::Power,
    ];

    /// Position of this variable in [`OutputVar::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RotorVelocity => "Vr",
            Self::DownstreamVelocity => "Vd",
            Self::ThrustCoefficient => "Ct",
            Self::Thrust => "thrust",
            Self::PowerCoefficient => "Cp",
            Self::Power => "power",
        }
    }

    /// Unit tag, or `None` for dimensionless variables.
    #[must_use]
    pub const fn units(self) -> Option<&'static str> {
        match self {
            Self::RotorVelocity | Self::DownstreamVelocity => Some("m/s"),
            Self::ThrustCoefficient | Self::PowerCoefficient => None,
            Self::Thrust => Some("N"),
            Self::Power => Some("W"),
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RotorVelocity => "Air velocity at rotor exit plane",
            Self::DownstreamVelocity => "Slipstream air velocity, downstream of rotor",
            Self::ThrustCoefficient => "Thrust Coefficient",
            Self::Thrust => "Thrust produced by the rotor",
            Self::PowerCoefficient => "Power Coefficient",
            Self::Power => "Power produced by the rotor",
        }
    }
}

impl fmt::Display for InputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OutputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, var) in InputVar::ALL.iter().enumerate() {
            assert_eq!(var.index(), i);
        }
        for (i, var) in OutputVar::ALL.iter().enumerate() {
            assert_eq!(var.index(), i);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = InputVar::ALL
            .iter()
            .map(|v| v.name())
            .chain(OutputVar::ALL.iter().map(|v| v.name()))
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), InputVar::COUNT + OutputVar::COUNT);
    }

    #[test]
    fn metadata() {
        assert_eq!(InputVar::Area.units(), Some("m**2"));
        assert_eq!(InputVar::Induction.units(), None);
        assert_eq!(OutputVar::Power.to_string(), "power");
        assert_eq!(OutputVar::Thrust.description(), "Thrust produced by the rotor");
    }
}
