//! Quasi-rigid-rotor-harmonic-oscillator (quasi-RRHO) vibrational model.
//!
//! Each mode is a mixture of a harmonic oscillator and a classical free rotor.
//! The harmonic fraction is the damping weight `w(ν̃) = 1 / (1 + (v0/ν̃)^alpha)`,
//! so stiff modes behave harmonically while soft modes, whose harmonic entropy
//! diverges as ν̃ → 0, approach free-rotor behaviour.
//!
//! Energy, heat capacity and entropy are blended per mode with `w`. The
//! partition function and zero-point energy are purely harmonic.

use super::modes;
use super::{CLASS_KEY, Mapping, VibrationalModel, decode_record, expect_class};
use crate::core::constants;
use crate::core::error::{
    Result, ThermoError, check_positive, check_temperature, check_wavenumbers,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ALPHA: u32 = 4;
/// Averaged moment of inertia in kg·m².
pub const DEFAULT_BAV: f64 = 1.0e-44;
/// Reference wavenumber of the damping function in cm⁻¹.
pub const DEFAULT_V0: f64 = 100.0;

/// Moment of inertia used for the free-rotor entropy of each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotorInertia {
    /// The averaged inertia `Bav` for every mode.
    #[default]
    Averaged,
    /// The harmonic mean of `Bav` and the mode's own rotor inertia.
    Scaled,
}

impl fmt::Display for RotorInertia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotorInertia::Averaged => write!(f, "averaged"),
            RotorInertia::Scaled => write!(f, "scaled"),
        }
    }
}

impl FromStr for RotorInertia {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "averaged" => Ok(RotorInertia::Averaged),
            "scaled" => Ok(RotorInertia::Scaled),
            other => Err(ThermoError::Deserialization(format!(
                "unknown rotor inertia '{}', expected 'averaged' or 'scaled'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QrrhoVib {
    vib_wavenumbers: Vec<f64>,
    alpha: u32,
    bav: f64,
    v0: f64,
    rotor_inertia: RotorInertia,
    vib_temperatures: Vec<f64>,
    scaled_wavenumbers: Vec<f64>,
    scaled_inertias: Vec<f64>,
}

#[derive(Deserialize)]
struct QrrhoVibRecord {
    vib_wavenumbers: Vec<f64>,
    alpha: u32,
    #[serde(rename = "Bav")]
    bav: f64,
    v0: f64,
    #[serde(default)]
    rotor_inertia: RotorInertia,
}

impl QrrhoVib {
    pub const CLASS: &'static str = "QRRHOVib";

    /// Builds the model with the default damping parameters
    /// (`alpha = 4`, `Bav = 1e-44 kg·m²`, `v0 = 100 cm⁻¹`).
    pub fn new(vib_wavenumbers: Vec<f64>) -> Result<Self> {
        Self::with_parameters(vib_wavenumbers, DEFAULT_ALPHA, DEFAULT_BAV, DEFAULT_V0)
    }

    pub fn with_parameters(vib_wavenumbers: Vec<f64>, alpha: u32, bav: f64, v0: f64) -> Result<Self> {
        check_wavenumbers(&vib_wavenumbers)?;
        let exponent = i32::try_from(alpha)
            .ok()
            .filter(|&a| a > 0)
            .ok_or(ThermoError::InvalidParameter {
                name: "alpha",
                value: f64::from(alpha),
            })?;
        let bav = check_positive("Bav", bav)?;
        let v0 = check_positive("v0", v0)?;

        let vib_temperatures = vib_wavenumbers
            .iter()
            .map(|&nu| constants::wavenumber_to_temperature(nu))
            .collect();
        let scaled_wavenumbers = vib_wavenumbers
            .iter()
            .map(|&nu| modes::damping_weight(nu, v0, exponent))
            .collect();
        let scaled_inertias = vib_wavenumbers
            .iter()
            .map(|&nu| modes::effective_inertia(constants::wavenumber_to_inertia(nu), bav))
            .collect();

        Ok(Self {
            vib_wavenumbers,
            alpha,
            bav,
            v0,
            rotor_inertia: RotorInertia::default(),
            vib_temperatures,
            scaled_wavenumbers,
            scaled_inertias,
        })
    }

    pub fn with_rotor_inertia(mut self, rotor_inertia: RotorInertia) -> Self {
        self.rotor_inertia = rotor_inertia;
        self
    }

    pub fn vib_wavenumbers(&self) -> &[f64] {
        &self.vib_wavenumbers
    }

    pub fn vib_temperatures(&self) -> &[f64] {
        &self.vib_temperatures
    }

    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    pub fn bav(&self) -> f64 {
        self.bav
    }

    pub fn v0(&self) -> f64 {
        self.v0
    }

    pub fn rotor_inertia(&self) -> RotorInertia {
        self.rotor_inertia
    }

    /// Harmonic fraction `w(ν̃)` of a mode with wavenumber `wavenumber` (cm⁻¹).
    pub fn scaled_wavenumber(&self, wavenumber: f64) -> f64 {
        modes::damping_weight(wavenumber, self.v0, self.alpha as i32)
    }

    /// Effective free-rotor inertia (kg·m²) of a mode with wavenumber `wavenumber` (cm⁻¹).
    pub fn scaled_inertia(&self, wavenumber: f64) -> f64 {
        modes::effective_inertia(constants::wavenumber_to_inertia(wavenumber), self.bav)
    }

    /// Harmonic branch of the energy blend, including the mode's zero-point energy.
    pub fn rrho_energy(&self, t: f64, vib_temperature: f64) -> Result<f64> {
        Ok(modes::rrho_energy(check_temperature(t)?, vib_temperature))
    }

    /// Harmonic branch of the entropy blend.
    pub fn harmonic_entropy(&self, t: f64, vib_temperature: f64) -> Result<f64> {
        Ok(modes::harmonic_entropy(check_temperature(t)?, vib_temperature))
    }

    /// Free-rotor branch of the entropy blend for a rotor of inertia `vib_inertia`.
    pub fn free_rotor_entropy(&self, t: f64, vib_inertia: f64) -> Result<f64> {
        Ok(modes::free_rotor_entropy(check_temperature(t)?, vib_inertia))
    }

    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        expect_class(mapping, Self::CLASS)?;
        let record: QrrhoVibRecord = decode_record(mapping)?;
        Ok(
            Self::with_parameters(record.vib_wavenumbers, record.alpha, record.bav, record.v0)?
                .with_rotor_inertia(record.rotor_inertia),
        )
    }

    fn rotor_inertia_of(&self, index: usize) -> f64 {
        match self.rotor_inertia {
            RotorInertia::Averaged => self.bav,
            RotorInertia::Scaled => self.scaled_inertias[index],
        }
    }
}

impl VibrationalModel for QrrhoVib {
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
            .zip(&self.scaled_wavenumbers)
            .map(|(&theta, &w)| {
                modes::blend(
                    w,
                    modes::harmonic_heat_capacity(t, theta),
                    modes::FREE_ROTOR_HEAT_CAPACITY,
                )
            })
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
        Ok(self
            .vib_temperatures
            .iter()
            .zip(&self.scaled_wavenumbers)
            .map(|(&theta, &w)| {
                modes::blend(w, modes::rrho_energy(t, theta), modes::FREE_ROTOR_ENERGY)
            })
            .sum())
    }

    fn s_over_r(&self, t: f64) -> Result<f64> {
        let t = check_temperature(t)?;
        Ok(self
            .vib_temperatures
            .iter()
            .zip(&self.scaled_wavenumbers)
            .enumerate()
            .map(|(i, (&theta, &w))| {
                modes::blend(
                    w,
                    modes::harmonic_entropy(t, theta),
                    modes::free_rotor_entropy(t, self.rotor_inertia_of(i)),
                )
            })
            .sum())
    }

    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert(CLASS_KEY.to_string(), Self::CLASS.into());
        mapping.insert(
            "vib_wavenumbers".to_string(),
            self.vib_wavenumbers.clone().into(),
        );
        mapping.insert("alpha".to_string(), self.alpha.into());
        mapping.insert("Bav".to_string(), self.bav.into());
        mapping.insert("v0".to_string(), self.v0.into());
        if self.rotor_inertia != RotorInertia::default() {
            mapping.insert(
                "rotor_inertia".to_string(),
                self.rotor_inertia.to_string().into(),
            );
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::statmech::harmonic::HarmonicVib;
    use serde_json::{Value, json};

    const T: f64 = 300.0;
    const WATER: [f64; 3] = [3825.434, 3710.2642, 1582.432];

    fn f64_approx_equal(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn hydrogen() -> QrrhoVib {
        QrrhoVib::new(vec![4306.1793]).unwrap()
    }

    fn water() -> QrrhoVib {
        QrrhoVib::new(WATER.to_vec()).unwrap()
    }

    #[test]
    fn new_uses_default_parameters() {
        let water = water();
        assert_eq!(water.alpha(), 4);
        assert_eq!(water.bav(), 1e-44);
        assert_eq!(water.v0(), 100.0);
        assert_eq!(water.rotor_inertia(), RotorInertia::Averaged);
    }

    #[test]
    fn scaled_wavenumber_matches_reference_for_water_bend() {
        assert!(f64_approx_equal(
            water().scaled_wavenumber(1582.432),
            0.999984052,
            1e-9
        ));
    }

    #[test]
    fn scaled_wavenumber_is_one_half_at_v0() {
        let model = QrrhoVib::with_parameters(vec![50.0], 3, 1e-44, 75.0).unwrap();
        assert_eq!(model.scaled_wavenumber(75.0), 0.5);
    }

    #[test]
    fn scaled_inertia_matches_reference_for_water_bend() {
        let inertia = water().scaled_inertia(1582.432);
        assert!(((inertia - 1.76893896253e-49) / 1.76893896253e-49).abs() < 1e-9);
    }

    #[test]
    fn rrho_energy_matches_reference() {
        let value = water().rrho_energy(T, 2276.767335).unwrap();
        assert!(f64_approx_equal(value, 3.798453353623928, 1e-10));
    }

    #[test]
    fn harmonic_entropy_matches_reference() {
        let value = water().harmonic_entropy(T, 2276.767335).unwrap();
        assert!(f64_approx_equal(value, 0.0043471298500, 1e-10));
    }

    #[test]
    fn free_rotor_entropy_matches_reference() {
        let value = water().free_rotor_entropy(T, 1.768938963e-49).unwrap();
        assert!(f64_approx_equal(value, 5.899139738e-02, 1e-9));
    }

    #[test]
    fn helpers_reject_invalid_temperatures() {
        let water = water();
        assert!(water.rrho_energy(0.0, 2276.767335).is_err());
        assert!(water.harmonic_entropy(-1.0, 2276.767335).is_err());
        assert!(water.free_rotor_entropy(f64::NAN, 1e-44).is_err());
    }

    #[test]
    fn heat_capacity_matches_reference_values() {
        assert!(f64_approx_equal(hydrogen().cv_over_r(T).unwrap(), 6.0337598762e-07, 1e-12));
        assert!(f64_approx_equal(water().cv_over_r(T).unwrap(), 2.918349716e-02, 1e-8));
        assert_eq!(water().cp_over_r(T).unwrap(), water().cv_over_r(T).unwrap());
    }

    #[test]
    fn internal_energy_and_enthalpy_match_reference_values() {
        assert!(f64_approx_equal(hydrogen().u_over_rt(T).unwrap(), 10.3260525951174, 1e-10));
        assert!(f64_approx_equal(water().u_over_rt(T).unwrap(), 21.868712644411, 1e-10));
        assert!(f64_approx_equal(water().h_over_rt(T).unwrap(), 21.868712644411, 1e-10));
    }

    #[test]
    fn entropy_matches_reference_values() {
        assert!(f64_approx_equal(hydrogen().s_over_r(T).unwrap(), 1.6315868671e-06, 1e-14));
        assert!(f64_approx_equal(water().s_over_r(T).unwrap(), 0.00444131527822, 1e-12));
    }

    #[test]
    fn free_energies_match_reference_values() {
        assert!(f64_approx_equal(hydrogen().a_over_rt(T).unwrap(), 10.3260509635305, 1e-10));
        assert!(f64_approx_equal(water().a_over_rt(T).unwrap(), 21.864271329132, 1e-10));
        assert!(f64_approx_equal(water().g_over_rt(T).unwrap(), 21.864271329132, 1e-10));
    }

    #[test]
    fn scaled_rotor_inertia_uses_per_mode_inertia() {
        let water = water().with_rotor_inertia(RotorInertia::Scaled);
        assert!(f64_approx_equal(
            water.s_over_r(T).unwrap(),
            0.004348189190084936,
            1e-12
        ));
        assert!(f64_approx_equal(
            water.a_over_rt(T).unwrap(),
            21.86436445522042,
            1e-10
        ));
    }

    #[test]
    fn partition_function_and_zpe_are_harmonic() {
        let qrrho = water();
        let harmonic = HarmonicVib::new(WATER.to_vec()).unwrap();
        assert_eq!(qrrho.q(T).unwrap(), harmonic.q(T).unwrap());
        assert_eq!(qrrho.q_excitation(T).unwrap(), harmonic.q_excitation(T).unwrap());
        assert_eq!(qrrho.zpe(), harmonic.zpe());
    }

    #[test]
    fn soft_mode_entropy_is_damped_below_harmonic_value() {
        let qrrho = QrrhoVib::new(vec![50.0])
            .unwrap()
            .with_rotor_inertia(RotorInertia::Scaled);
        let harmonic = HarmonicVib::new(vec![50.0]).unwrap();
        let damped = qrrho.s_over_r(T).unwrap();
        assert!(f64_approx_equal(damped, 1.823967410134812, 1e-9));
        assert!(damped < harmonic.s_over_r(T).unwrap());
    }

    #[test]
    fn soft_mode_energy_and_heat_capacity_approach_free_rotor_values() {
        let qrrho = QrrhoVib::new(vec![50.0]).unwrap();
        assert!(f64_approx_equal(qrrho.cv_over_r(T).unwrap(), 0.5291306996029626, 1e-10));
        assert!(f64_approx_equal(qrrho.u_over_rt(T).unwrap(), 0.5296933686114231, 1e-10));
    }

    #[test]
    fn helmholtz_energy_is_internal_energy_minus_entropy() {
        let water = water();
        for t in [10.0, 300.0, 2000.0] {
            let expected = water.u_over_rt(t).unwrap() - water.s_over_r(t).unwrap();
            assert!(f64_approx_equal(water.a_over_rt(t).unwrap(), expected, 1e-12));
        }
    }

    #[test]
    fn with_parameters_rejects_invalid_parameters() {
        assert_eq!(
            QrrhoVib::with_parameters(WATER.to_vec(), 0, 1e-44, 100.0),
            Err(ThermoError::InvalidParameter {
                name: "alpha",
                value: 0.0
            })
        );
        assert!(matches!(
            QrrhoVib::with_parameters(WATER.to_vec(), i32::MAX as u32 + 1, 1e-44, 100.0),
            Err(ThermoError::InvalidParameter { name: "alpha", .. })
        ));
        assert!(matches!(
            QrrhoVib::with_parameters(WATER.to_vec(), 4, -1e-44, 100.0),
            Err(ThermoError::InvalidParameter { name: "Bav", .. })
        ));
        assert!(matches!(
            QrrhoVib::with_parameters(WATER.to_vec(), 4, 1e-44, 0.0),
            Err(ThermoError::InvalidParameter { name: "v0", .. })
        ));
        assert!(matches!(
            QrrhoVib::new(vec![-12.0]),
            Err(ThermoError::InvalidMode { index: 0, .. })
        ));
    }

    #[test]
    fn to_mapping_produces_flat_attributes() {
        let expected = json!({
            "class": "QRRHOVib",
            "vib_wavenumbers": [3825.434, 3710.2642, 1582.432],
            "alpha": 4,
            "Bav": 1e-44,
            "v0": 100.0,
        });
        assert_eq!(Value::Object(water().to_mapping()), expected);
    }

    #[test]
    fn from_mapping_accepts_integer_v0() {
        let mapping = match json!({
            "class": "QRRHOVib",
            "vib_wavenumbers": [3825.434, 3710.2642, 1582.432],
            "alpha": 4,
            "Bav": 1e-44,
            "v0": 100,
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        assert_eq!(QrrhoVib::from_mapping(&mapping).unwrap(), water());
    }

    #[test]
    fn from_mapping_round_trips_including_rotor_inertia() {
        let scaled = water().with_rotor_inertia(RotorInertia::Scaled);
        let mapping = scaled.to_mapping();
        assert_eq!(mapping.get("rotor_inertia"), Some(&Value::from("scaled")));
        assert_eq!(QrrhoVib::from_mapping(&mapping).unwrap(), scaled);
    }

    #[test]
    fn from_mapping_requires_every_damping_parameter() {
        for key in ["alpha", "Bav", "v0", "vib_wavenumbers"] {
            let mut mapping = water().to_mapping();
            mapping.remove(key);
            let result = QrrhoVib::from_mapping(&mapping);
            assert!(
                matches!(result, Err(ThermoError::Deserialization(ref msg)) if msg.contains(key)),
                "missing '{}' gave {:?}",
                key,
                result
            );
        }
    }

    #[test]
    fn from_mapping_rejects_harmonic_class() {
        let mapping = HarmonicVib::new(WATER.to_vec()).unwrap().to_mapping();
        assert!(matches!(
            QrrhoVib::from_mapping(&mapping),
            Err(ThermoError::Deserialization(_))
        ));
    }

    #[test]
    fn rotor_inertia_parses_from_its_display_form() {
        for variant in [RotorInertia::Averaged, RotorInertia::Scaled] {
            assert_eq!(variant.to_string().parse::<RotorInertia>(), Ok(variant));
        }
        assert!("rigid".parse::<RotorInertia>().is_err());
    }

    #[test]
    fn blended_properties_stay_finite_at_extreme_temperatures() {
        let model = QrrhoVib::new(vec![100.0, 3825.434]).unwrap();
        let classical_cv: f64 = model
            .vib_wavenumbers()
            .iter()
            .map(|&nu| {
                let w = model.scaled_wavenumber(nu);
                w + (1.0 - w) * 0.5
            })
            .sum();
        for t in [1e100, 1e200] {
            let props = model.properties(t).unwrap();
            assert!(f64_approx_equal(props.cv_over_r, classical_cv, 1e-12));
            assert!(props.s_over_r.is_finite());
            assert!(props.g_over_rt.is_finite());
        }
    }
}
