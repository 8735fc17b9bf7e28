//! Wind energy models.

pub mod actuator_disc;
