//! High-level procedures built on the vibrational models.
//!
//! - [`sweep`] evaluates every property of a model over a list of temperatures.

pub mod sweep;
