//! # Twine Wind Models
//!
//! Wind turbine models for [Twine](https://github.com/isentropic-dev/twine),
//! with a Betz-limit optimization that checks the models and solvers against
//! a known analytical optimum.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models, including a bounded
//!   gradient optimizer.
//!
//! ## Example
//!
//! ```
//! use twine_wind_models::models::wind::actuator_disc::{BETZ_LIMIT, BetzLimit};
//!
//! let solution = BetzLimit::default().solve().unwrap();
//! assert!((solution.objective - BETZ_LIMIT).abs() / BETZ_LIMIT < 1e-4);
//! ```
//!
//! ## Logging
//!
//! Solvers report progress through the [`log`] facade (`debug` per iteration,
//! `trace` per line-search trial). Install any `log` backend to see it.

pub mod models;
pub mod support;
