//! File I/O for vibrational models and property tables.
//!
//! Models are persisted as their flat `class`-tagged JSON mapping; property
//! tables are written as CSV with one row per temperature.

pub mod model_file;
pub mod table;
