//! Physical constants (CODATA 2014) and the wavenumber conversions built on them.
//!
//! Every reference value in the test suites was produced with this constant set,
//! so the values are fixed here rather than tracking later CODATA revisions.

use std::f64::consts::PI;

/// Planck's constant in J·s.
pub const PLANCK_J_S: f64 = 6.626070040e-34;
/// Planck's constant in eV·s.
pub const PLANCK_EV_S: f64 = 4.135667662e-15;
/// Boltzmann's constant in J/K.
pub const BOLTZMANN_J_K: f64 = 1.38064852e-23;
/// Boltzmann's constant in eV/K.
pub const BOLTZMANN_EV_K: f64 = 8.6173303e-5;
/// Speed of light in m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
/// Speed of light in cm/s, the unit that pairs with wavenumbers in cm⁻¹.
pub const SPEED_OF_LIGHT_CM_S: f64 = SPEED_OF_LIGHT_M_S * 100.0;
/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT_J_MOL_K: f64 = 8.3144598;
/// Avogadro's number in 1/mol.
pub const AVOGADRO: f64 = 6.022140857e23;

/// Vibrational temperature θ = h·c·ν̃ / k_B in K for a wavenumber in cm⁻¹.
#[inline]
pub fn wavenumber_to_temperature(wavenumber: f64) -> f64 {
    PLANCK_J_S * SPEED_OF_LIGHT_CM_S * wavenumber / BOLTZMANN_J_K
}

/// Quantum energy h·c·ν̃ in eV for a wavenumber in cm⁻¹.
#[inline]
pub fn wavenumber_to_energy_ev(wavenumber: f64) -> f64 {
    PLANCK_EV_S * SPEED_OF_LIGHT_CM_S * wavenumber
}

/// Moment of inertia μ = h / (8π²·c·ν̃) in kg·m² of a free rotor whose
/// rotational constant matches a wavenumber in cm⁻¹.
#[inline]
pub fn wavenumber_to_inertia(wavenumber: f64) -> f64 {
    PLANCK_J_S / (8.0 * PI.powi(2) * SPEED_OF_LIGHT_CM_S * wavenumber)
}

/// Converts an energy in eV to a molar energy in kJ/mol.
#[inline]
pub fn ev_to_kj_per_mol(energy_ev: f64) -> f64 {
    energy_ev * BOLTZMANN_J_K / BOLTZMANN_EV_K * AVOGADRO / 1000.0
}
