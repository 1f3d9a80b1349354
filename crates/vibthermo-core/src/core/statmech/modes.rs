//! Per-mode statistical mechanics shared by every vibrational model.
//!
//! Each function takes the temperature and the mode's characteristic value
//! (vibrational temperature or moment of inertia) and returns a dimensionless
//! contribution. All exponentials are written in terms of `exp(-θ/T)` so that
//! stiff modes at low temperature underflow to the correct limit instead of
//! overflowing.

use crate::core::constants::{BOLTZMANN_J_K, PLANCK_J_S};
use std::f64::consts::PI;

/// Classical energy of a free internal rotor, U/RT.
pub const FREE_ROTOR_ENERGY: f64 = 0.5;
/// Classical heat capacity of a free internal rotor, Cv/R.
pub const FREE_ROTOR_HEAT_CAPACITY: f64 = 0.5;

/// Partition function of one oscillator referenced to the bottom of the well.
#[inline]
pub fn harmonic_partition(t: f64, vib_temperature: f64) -> f64 {
    let x = vib_temperature / t;
    (-0.5 * x).exp() / -(-x).exp_m1()
}

/// Partition function of one oscillator referenced to its ground state.
#[inline]
pub fn excitation_partition(t: f64, vib_temperature: f64) -> f64 {
    let x = vib_temperature / t;
    1.0 / -(-x).exp_m1()
}

#[inline]
pub fn harmonic_heat_capacity(t: f64, vib_temperature: f64) -> f64 {
    let x = vib_temperature / t;
    let ratio = x / -(-x).exp_m1();
    ratio * ratio * (-x).exp()
}

/// Thermal (above zero-point) energy of one oscillator, U/RT.
#[inline]
pub fn harmonic_thermal_energy(t: f64, vib_temperature: f64) -> f64 {
    let x = vib_temperature / t;
    x * (-x).exp() / -(-x).exp_m1()
}

/// Energy of one oscillator including its zero-point part, U/RT.
#[inline]
pub fn rrho_energy(t: f64, vib_temperature: f64) -> f64 {
    0.5 * vib_temperature / t + harmonic_thermal_energy(t, vib_temperature)
}

#[inline]
pub fn harmonic_entropy(t: f64, vib_temperature: f64) -> f64 {
    let x = vib_temperature / t;
    harmonic_thermal_energy(t, vib_temperature) - (-(-x).exp_m1()).ln()
}

/// Entropy S/R of a classical free rotor with moment of inertia `inertia` (kg·m²).
#[inline]
pub fn free_rotor_entropy(t: f64, inertia: f64) -> f64 {
    let arg = 8.0 * PI.powi(3) * inertia * BOLTZMANN_J_K * t / PLANCK_J_S.powi(2);
    0.5 + arg.sqrt().ln()
}

/// Damping weight `1 / (1 + (v0/ν̃)^alpha)`: the fraction of a mode treated
/// as a harmonic oscillator. Equals 0.5 at `ν̃ = v0`.
#[inline]
pub fn damping_weight(wavenumber: f64, v0: f64, alpha: i32) -> f64 {
    1.0 / (1.0 + (v0 / wavenumber).powi(alpha))
}

/// Harmonic mean of a mode's rotor inertia and the averaged inertia `bav`.
#[inline]
pub fn effective_inertia(mode_inertia: f64, bav: f64) -> f64 {
    mode_inertia * bav / (mode_inertia + bav)
}

/// Blends a harmonic and a free-rotor contribution with weight `w`.
#[inline]
pub fn blend(w: f64, harmonic: f64, free_rotor: f64) -> f64 {
    w * harmonic + (1.0 - w) * free_rotor
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_BEND_THETA: f64 = 2276.767335;
    const T: f64 = 300.0;

    fn f64_approx_equal(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn rrho_energy_matches_reference_for_water_bend() {
        assert!(f64_approx_equal(
            rrho_energy(T, WATER_BEND_THETA),
            3.798453353623928,
            1e-10
        ));
    }

    #[test]
    fn harmonic_entropy_matches_reference_for_water_bend() {
        assert!(f64_approx_equal(
            harmonic_entropy(T, WATER_BEND_THETA),
            0.0043471298500,
            1e-10
        ));
    }

    #[test]
    fn free_rotor_entropy_matches_reference_for_water_bend_inertia() {
        assert!(f64_approx_equal(
            free_rotor_entropy(T, 1.768938963e-49),
            5.899139738e-02,
            1e-9
        ));
    }

    #[test]
    fn free_rotor_entropy_grows_with_half_log_of_temperature() {
        let low = free_rotor_entropy(100.0, 1e-44);
        let high = free_rotor_entropy(400.0, 1e-44);
        assert!(f64_approx_equal(high - low, 0.5 * 4.0_f64.ln(), 1e-12));
    }

    #[test]
    fn harmonic_partition_is_excitation_partition_times_zero_point_factor() {
        let theta = 1500.0;
        let expected = excitation_partition(T, theta) * (-0.5 * theta / T).exp();
        assert!(f64_approx_equal(
            harmonic_partition(T, theta),
            expected,
            1e-15
        ));
    }

    #[test]
    fn excitation_partition_approaches_one_for_stiff_modes() {
        assert!(f64_approx_equal(excitation_partition(1.0, 6000.0), 1.0, 1e-15));
        assert!(excitation_partition(T, 6000.0) > 1.0);
    }

    #[test]
    fn stiff_modes_at_low_temperature_underflow_to_zero_instead_of_nan() {
        let theta = 6195.6;
        let t = 1.0;
        assert_eq!(harmonic_heat_capacity(t, theta), 0.0);
        assert_eq!(harmonic_thermal_energy(t, theta), 0.0);
        assert_eq!(harmonic_entropy(t, theta), 0.0);
        assert_eq!(harmonic_partition(t, theta), 0.0);
    }

    #[test]
    fn harmonic_heat_capacity_approaches_classical_limit_for_soft_modes() {
        assert!(f64_approx_equal(harmonic_heat_capacity(1e6, 1.0), 1.0, 1e-9));
    }

    #[test]
    fn harmonic_thermal_energy_approaches_classical_limit_for_soft_modes() {
        // x/(e^x - 1) -> 1 - x/2 for small x.
        let x = 1e-4;
        assert!(f64_approx_equal(
            harmonic_thermal_energy(1.0, x),
            1.0 - x / 2.0,
            1e-8
        ));
    }

    #[test]
    fn soft_modes_at_extreme_temperature_stay_finite() {
        for x in [1e-17, 1e-98, 1e-170, 1e-300] {
            assert!(f64_approx_equal(harmonic_heat_capacity(1.0, x), 1.0, 1e-12));
            let entropy = harmonic_entropy(1.0, x);
            assert!(entropy.is_finite());
            assert!(f64_approx_equal(entropy, 1.0 - x.ln(), 1e-9));
        }
    }

    #[test]
    fn damping_weight_is_one_half_at_reference_wavenumber() {
        assert_eq!(damping_weight(100.0, 100.0, 4), 0.5);
        assert_eq!(damping_weight(37.5, 37.5, 1), 0.5);
    }

    #[test]
    fn damping_weight_is_strictly_increasing_in_wavenumber() {
        let weights: Vec<f64> = [10.0, 50.0, 100.0, 200.0, 1000.0]
            .iter()
            .map(|&nu| damping_weight(nu, 100.0, 4))
            .collect();
        assert!(weights.windows(2).all(|w| w[0] < w[1]));
        assert!(weights.iter().all(|&w| w > 0.0 && w < 1.0));
    }

    #[test]
    fn damping_weight_matches_reference_for_water_bend() {
        assert!(f64_approx_equal(
            damping_weight(1582.432, 100.0, 4),
            0.999984052,
            1e-9
        ));
    }

    #[test]
    fn effective_inertia_reduces_to_smaller_of_the_two_inertias() {
        assert!(f64_approx_equal(
            effective_inertia(1e-49, 1e-44) / 1e-49,
            1.0,
            1e-4
        ));
        assert!(f64_approx_equal(
            effective_inertia(1e-40, 1e-44) / 1e-44,
            1.0,
            1e-3
        ));
    }

    #[test]
    fn blend_returns_endpoints_for_pure_weights() {
        assert_eq!(blend(1.0, 3.0, 7.0), 3.0);
        assert_eq!(blend(0.0, 3.0, 7.0), 7.0);
        assert_eq!(blend(0.25, 4.0, 8.0), 7.0);
    }
}
