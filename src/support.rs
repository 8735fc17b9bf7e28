//! Supporting utilities used by models.
//!
//! These modules are public because they're useful outside this crate, but
//! their APIs are not stable.

pub mod constraint;
pub mod optimize;
