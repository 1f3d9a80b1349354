use super::{CLASS_KEY, Mapping, VibrationalModel, expect_class};
use crate::core::error::{Result, check_temperature};

/// Placeholder for species without vibrational degrees of freedom.
///
/// Contributes a partition function of one and zero to every other property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyVib;

impl EmptyVib {
    pub const CLASS: &'static str = "EmptyVib";

    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        expect_class(mapping, Self::CLASS)?;
        Ok(Self)
    }
}

impl VibrationalModel for EmptyVib {
    fn q(&self, t: f64) -> Result<f64> {
        check_temperature(t)?;
        Ok(1.0)
    }

    fn q_excitation(&self, t: f64) -> Result<f64> {
        check_temperature(t)?;
        Ok(1.0)
    }

    fn cv_over_r(&self, t: f64) -> Result<f64> {
        check_temperature(t)?;
        Ok(0.0)
    }

    fn zpe(&self) -> f64 {
        0.0
    }

    fn u_over_rt(&self, t: f64) -> Result<f64> {
        check_temperature(t)?;
        Ok(0.0)
    }

    fn s_over_r(&self, t: f64) -> Result<f64> {
        check_temperature(t)?;
        Ok(0.0)
    }

    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert(CLASS_KEY.to_string(), Self::CLASS.into());
        mapping
    }
}
