//! # Core Module
//!
//! Building blocks for vibrational thermochemistry.
//!
//! - **Constants** ([`constants`]) - CODATA 2014 constants and wavenumber conversions
//! - **Errors** ([`error`]) - Validation failures at model construction and evaluation
//! - **Models** ([`statmech`]) - Harmonic, quasi-RRHO and empty vibrational models
//! - **File I/O** ([`io`]) - JSON model files and CSV property tables

pub mod constants;
pub mod error;
pub mod io;
pub mod statmech;
