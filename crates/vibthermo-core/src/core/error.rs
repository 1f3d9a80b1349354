use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThermoError {
    #[error("Invalid vibrational mode at index {index}: wavenumber {wavenumber} cm^-1 must be positive and finite")]
    InvalidMode { index: usize, wavenumber: f64 },

    #[error("Invalid temperature: {0} K must be positive and finite")]
    InvalidTemperature(f64),

    #[error("Invalid model parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Failed to deserialize vibrational model: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, ThermoError>;

/// Rejects temperatures that would turn the exponentials into NaN or negative
/// partition functions.
pub fn check_temperature(t: f64) -> Result<f64> {
    if t.is_finite() && t > 0.0 {
        Ok(t)
    } else {
        Err(ThermoError::InvalidTemperature(t))
    }
}

pub fn check_wavenumbers(wavenumbers: &[f64]) -> Result<()> {
    match wavenumbers
        .iter()
        .enumerate()
        .find(|(_, nu)| !(nu.is_finite() && **nu > 0.0))
    {
        Some((index, &wavenumber)) => Err(ThermoError::InvalidMode { index, wavenumber }),
        None => Ok(()),
    }
}

pub fn check_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ThermoError::InvalidParameter { name, value })
    }
}
