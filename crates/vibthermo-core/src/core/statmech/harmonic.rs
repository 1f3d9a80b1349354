use super::modes;
use super::{CLASS_KEY, Mapping, VibrationalModel, decode_record, expect_class};
use crate::core::constants;
use crate::core::error::{Result, check_temperature, check_wavenumbers};
use serde::Deserialize;

/// Vibrational modes treated as independent quantum harmonic oscillators.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicVib {
    vib_wavenumbers: Vec<f64>,
    vib_temperatures: Vec<f64>,
}

#[derive(Deserialize)]
struct HarmonicVibRecord {
    vib_wavenumbers: Vec<f64>,
}

impl HarmonicVib {
    pub const CLASS: &'static str = "HarmonicVib";

    /// Builds the model from wavenumbers in cm⁻¹. Imaginary or translational
    /// modes must be filtered out by the caller; any wavenumber that is not
    /// positive and finite is rejected.
    pub fn new(vib_wavenumbers: Vec<f64>) -> Result<Self> {
        check_wavenumbers(&vib_wavenumbers)?;
        let vib_temperatures = vib_wavenumbers
            .iter()
            .map(|&nu| constants::wavenumber_to_temperature(nu))
            .collect();
        Ok(Self {
            vib_wavenumbers,
            vib_temperatures,
        })
    }

    pub fn vib_wavenumbers(&self) -> &[f64] {
        &self.vib_wavenumbers
    }

    /// Vibrational temperatures θ in K, in the same order as the wavenumbers.
    pub fn vib_temperatures(&self) -> &[f64] {
        &self.vib_temperatures
    }

    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        expect_class(mapping, Self::CLASS)?;
        let record: HarmonicVibRecord = decode_record(mapping)?;
        Self::new(record.vib_wavenumbers)
    }

    fn zpe_over_rt(&self, t: f64) -> f64 {
        self.vib_temperatures.iter().map(|&theta| 0.5 * theta / t).sum()
    }
}

impl VibrationalModel for HarmonicVib {
    fn q(&self, t: f64) -> Result<f64> {
        let t = check_temperature(t)?;
        Ok(self
            .vib_temperatures
            .iter()
            .map(|&theta| modes::harmonic_partition(t, theta))
            .product())
    }

    fn q_excitation(&self, t: f64) -> Result<f64> {
        let t = check_temperature(t)?;
        Ok(self
            .vib_temperatures
            .iter()
            .map(|&theta| modes::excitation_partition(t, theta))
            .product())
    }

    fn cv_over_r(&self, t: f64) -> Result<f64> {
        let t = check_temperature(t)?;
        Ok(self
            .vib_temperatures
            .iter()
            .map(|&theta| modes::harmonic_heat_capacity(t, theta))
            .sum())
    }

    fn zpe(&self) -> f64 {
        self.vib_wavenumbers
            .iter()
            .map(|&nu| 0.5 * constants::wavenumber_to_energy_ev(nu))
            .sum()
    }

    fn u_over_rt(&self, t: f64) -> Result<f64> {
        let t = check_temperature(t)?;
        let thermal: f64 = self
            .vib_temperatures
            .iter()
            .map(|&theta| modes::harmonic_thermal_energy(t, theta))
            .sum();
        Ok(self.zpe_over_rt(t) + thermal)
    }

    fn s_over_r(&self, t: f64) -> Result<f64> {
        let t = check_temperature(t)?;
        Ok(self
            .vib_temperatures
            .iter()
            .map(|&theta| modes::harmonic_entropy(t, theta))
            .sum())
    }

    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert(CLASS_KEY.to_string(), Self::CLASS.into());
        mapping.insert(
            "vib_wavenumbers".to_string(),
            self.vib_wavenumbers.clone().into(),
        );
        mapping
    }
}
