//! # VibThermo Core Library
//!
//! Equilibrium thermodynamic properties of molecular vibrations under the
//! harmonic-oscillator and quasi-rigid-rotor-harmonic-oscillator models.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Physical constants, the error taxonomy, the
//!   stateless vibrational models (`HarmonicVib`, `QrrhoVib`, `EmptyVib`) and
//!   their file I/O.
//!
//! - **[`workflows`]: The Public API.** Procedures that evaluate a model over
//!   many temperatures, such as the temperature sweep behind the CLI.
//!
//! All models are immutable values; every property accessor is a pure function
//! of the stored modes and the temperature, so models can be shared freely
//! between threads.

pub mod core;
pub mod workflows;
