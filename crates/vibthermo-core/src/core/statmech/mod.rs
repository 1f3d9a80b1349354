//! # Statistical Mechanics Module
//!
//! Vibrational contributions to the thermodynamic properties of a molecule.
//!
//! ## Models
//!
//! - [`harmonic::HarmonicVib`] - Quantum harmonic oscillator for every mode
//! - [`qrrho::QrrhoVib`] - Quasi-rigid-rotor-harmonic-oscillator correction, which
//!   damps low-frequency modes towards free-rotor behaviour
//! - [`empty::EmptyVib`] - Placeholder for species without vibrational modes
//!
//! Every model implements [`VibrationalModel`]. Properties are returned in
//! dimensionless form (`CvoR`, `UoRT`, `SoR`, ...), except the zero-point energy,
//! which is in eV. The closed [`model::VibModel`] enum dispatches over the three
//! models and owns the flat `class`-tagged serialization.
//!
//! ## Usage
//!
//! ```
//! use vibthermo::core::statmech::VibrationalModel;
//! use vibthermo::core::statmech::qrrho::QrrhoVib;
//!
//! let water = QrrhoVib::new(vec![3825.434, 3710.2642, 1582.432])?;
//! let entropy = water.s_over_r(300.0)?;
//! assert!((entropy - 0.00444131528).abs() < 1e-9);
//! # Ok::<(), vibthermo::core::error::ThermoError>(())
//! ```

pub mod empty;
pub mod harmonic;
pub mod model;
pub mod modes;
pub mod properties;
pub mod qrrho;

use crate::core::error::{Result, ThermoError};
use properties::ThermoProperties;
use serde_json::Value;

/// Flat attribute mapping produced by [`VibrationalModel::to_mapping`].
pub type Mapping = serde_json::Map<String, Value>;

/// Key of the discriminator naming the model a mapping belongs to.
pub const CLASS_KEY: &str = "class";

pub trait VibrationalModel {
    /// Partition function referenced to the bottom of each potential well.
    fn q(&self, t: f64) -> Result<f64>;

    /// Partition function referenced to the vibrational ground state.
    fn q_excitation(&self, t: f64) -> Result<f64>;

    fn cv_over_r(&self, t: f64) -> Result<f64>;

    fn cp_over_r(&self, t: f64) -> Result<f64> {
        self.cv_over_r(t)
    }

    /// Zero-point energy in eV.
    fn zpe(&self) -> f64;

    fn u_over_rt(&self, t: f64) -> Result<f64>;

    fn h_over_rt(&self, t: f64) -> Result<f64> {
        self.u_over_rt(t)
    }

    fn s_over_r(&self, t: f64) -> Result<f64>;

    fn a_over_rt(&self, t: f64) -> Result<f64> {
        Ok(self.u_over_rt(t)? - self.s_over_r(t)?)
    }

    fn g_over_rt(&self, t: f64) -> Result<f64> {
        Ok(self.h_over_rt(t)? - self.s_over_r(t)?)
    }

    fn to_mapping(&self) -> Mapping;

    /// Evaluates every property at `t`.
    fn properties(&self, t: f64) -> Result<ThermoProperties> {
        Ok(ThermoProperties {
            t,
            q: self.q(t)?,
            cv_over_r: self.cv_over_r(t)?,
            cp_over_r: self.cp_over_r(t)?,
            u_over_rt: self.u_over_rt(t)?,
            h_over_rt: self.h_over_rt(t)?,
            s_over_r: self.s_over_r(t)?,
            a_over_rt: self.a_over_rt(t)?,
            g_over_rt: self.g_over_rt(t)?,
            zpe: self.zpe(),
        })
    }
}

/// Verifies that `mapping` carries the expected `class` tag.
pub(crate) fn expect_class(mapping: &Mapping, class: &str) -> Result<()> {
    match mapping.get(CLASS_KEY) {
        Some(Value::String(found)) if found == class => Ok(()),
        Some(other) => Err(ThermoError::Deserialization(format!(
            "expected class '{}', found {}",
            class, other
        ))),
        None => Err(ThermoError::Deserialization(format!(
            "missing required key '{}'",
            CLASS_KEY
        ))),
    }
}

/// Deserializes the attribute record of a model from its flat mapping.
pub(crate) fn decode_record<T: serde::de::DeserializeOwned>(mapping: &Mapping) -> Result<T> {
    serde_json::from_value(Value::Object(mapping.clone()))
        .map_err(|e| ThermoError::Deserialization(e.to_string()))
}
