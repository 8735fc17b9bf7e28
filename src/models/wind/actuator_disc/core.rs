//! Actuator disc computations.
//!
//! The rotor is idealized as a permeable disc that extracts momentum
//! uniformly from the flow passing through it. Conservation of momentum and
//! energy across the disc gives closed-form relations for the slipstream
//! velocities, thrust, and power in terms of the induced velocity factor `a`.

mod check;
mod input;
mod output;
mod partials;
mod variables;

pub use check::{CheckConfig, Form, PartialCheck, PartialsCheck, check_partials};
pub use input::Input;
pub use output::Output;
pub use partials::Partials;
pub use variables::{InputVar, OutputVar};

/// Evaluates the actuator disc model.
///
/// With `q·A = ½ ρ Area Vu²`:
///
/// ```text
/// Vd     = Vu (1 - 2a)
/// Vr     = (Vu + Vd) / 2
/// Ct     = 4a (1 - a)
/// thrust = Ct q·A
/// Cp     = Ct (1 - a)
/// power  = Cp q·A Vu
/// ```
#[must_use]
pub fn compute(input: &Input) -> Output {
    let [a, area, rho, vu] = input.to_si();

    let q_area = 0.5 * rho * area * vu.powi(2);

    let vd = vu * (1.0 - 2.0 * a);
    let vr = 0.5 * (vu + vd);

    let ct = 4.0 * a * (1.0 - a);
    let thrust = ct * q_area;

    let cp = ct * (1.0 - a);
    let power = cp * q_area * vu;

    Output::from_si([vr, vd, ct, thrust, cp, power])
}

/// Computes the analytic partial derivatives of [`compute`].
#[must_use]
pub fn partials(input: &Input) -> Partials {
    use InputVar::{Area, Density, Induction, UpstreamVelocity};
    use OutputVar::{
        DownstreamVelocity, Power, PowerCoefficient, RotorVelocity, Thrust, ThrustCoefficient,
    };

    let [a, area, rho, vu] = input.to_si();

    let a_area = a * area;
    let one_minus_a = 1.0 - a;
    let a_area_rho_vu = a_area * rho * vu;

    let mut j = Partials::zeros();

    j.set(RotorVelocity, Induction, -vu);
    j.set(RotorVelocity, UpstreamVelocity, one_minus_a);

    j.set(DownstreamVelocity, Induction, -2.0 * vu);
    j.set(DownstreamVelocity, UpstreamVelocity, 1.0 - 2.0 * a);

    let dct_da = 4.0 - 8.0 * a;
    j.set(ThrustCoefficient, Induction, dct_da);

    j.set(Thrust, Induction, 0.5 * rho * vu.powi(2) * area * dct_da);
    j.set(Thrust, Area, 2.0 * vu.powi(2) * a * rho * one_minus_a);
    j.set(Thrust, Density, 2.0 * a_area * vu.powi(2) * one_minus_a);
    j.set(Thrust, UpstreamVelocity, 4.0 * a_area_rho_vu * one_minus_a);

    j.set(
        PowerCoefficient,
        Induction,
        4.0 * a * (2.0 * a - 2.0) + 4.0 * one_minus_a.powi(2),
    );

    j.set(
        Power,
        Induction,
        2.0 * area * vu.powi(3) * a * rho * (2.0 * a - 2.0)
            + 2.0 * area * vu.powi(3) * rho * one_minus_a.powi(2),
    );
    j.set(Power, Area, 2.0 * vu.powi(3) * a * rho * one_minus_a.powi(2));
    j.set(Power, Density, 2.0 * a_area * vu.powi(3) * one_minus_a.powi(2));
    j.set(
        Power,
        UpstreamVelocity,
        6.0 * area * vu.powi(2) * a * rho * one_minus_a.powi(2),
    );

    j
}
