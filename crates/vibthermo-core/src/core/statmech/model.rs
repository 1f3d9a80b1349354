use super::empty::EmptyVib;
use super::harmonic::HarmonicVib;
use super::qrrho::QrrhoVib;
use super::{CLASS_KEY, Mapping, VibrationalModel};
use crate::core::error::{Result, ThermoError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Any of the vibrational models, tagged by `class` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Mapping", try_from = "Mapping")]
pub enum VibModel {
    Harmonic(HarmonicVib),
    Qrrho(QrrhoVib),
    Empty(EmptyVib),
}

impl VibModel {
    pub fn class(&self) -> &'static str {
        match self {
            VibModel::Harmonic(_) => HarmonicVib::CLASS,
            VibModel::Qrrho(_) => QrrhoVib::CLASS,
            VibModel::Empty(_) => EmptyVib::CLASS,
        }
    }

    /// Rebuilds a model from its flat mapping, dispatching on the `class` key.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        let class = match mapping.get(CLASS_KEY) {
            Some(Value::String(class)) => class.as_str(),
            Some(other) => {
                return Err(ThermoError::Deserialization(format!(
                    "'{}' must be a string, found {}",
                    CLASS_KEY, other
                )));
            }
            None => {
                return Err(ThermoError::Deserialization(format!(
                    "missing required key '{}'",
                    CLASS_KEY
                )));
            }
        };
        match class {
            HarmonicVib::CLASS => HarmonicVib::from_mapping(mapping).map(VibModel::Harmonic),
            QrrhoVib::CLASS => QrrhoVib::from_mapping(mapping).map(VibModel::Qrrho),
            EmptyVib::CLASS => EmptyVib::from_mapping(mapping).map(VibModel::Empty),
            unknown => Err(ThermoError::Deserialization(format!(
                "unrecognized model class '{}'",
                unknown
            ))),
        }
    }

    fn inner(&self) -> &dyn VibrationalModel {
        match self {
            VibModel::Harmonic(model) => model,
            VibModel::Qrrho(model) => model,
            VibModel::Empty(model) => model,
        }
    }
}

impl VibrationalModel for VibModel {
    fn q(&self, t: f64) -> Result<f64> {
        self.inner().q(t)
    }

    fn q_excitation(&self, t: f64) -> Result<f64> {
        self.inner().q_excitation(t)
    }

    fn cv_over_r(&self, t: f64) -> Result<f64> {
        self.inner().cv_over_r(t)
    }

    fn cp_over_r(&self, t: f64) -> Result<f64> {
        self.inner().cp_over_r(t)
    }

    fn zpe(&self) -> f64 {
        self.inner().zpe()
    }

    fn u_over_rt(&self, t: f64) -> Result<f64> {
        self.inner().u_over_rt(t)
    }

    fn h_over_rt(&self, t: f64) -> Result<f64> {
        self.inner().h_over_rt(t)
    }

    fn s_over_r(&self, t: f64) -> Result<f64> {
        self.inner().s_over_r(t)
    }

    fn a_over_rt(&self, t: f64) -> Result<f64> {
        self.inner().a_over_rt(t)
    }

    fn g_over_rt(&self, t: f64) -> Result<f64> {
        self.inner().g_over_rt(t)
    }

    fn to_mapping(&self) -> Mapping {
        self.inner().to_mapping()
    }
}

impl From<HarmonicVib> for VibModel {
    fn from(model: HarmonicVib) -> Self {
        VibModel::Harmonic(model)
    }
}

impl From<QrrhoVib> for VibModel {
    fn from(model: QrrhoVib) -> Self {
        VibModel::Qrrho(model)
    }
}

impl From<EmptyVib> for VibModel {
    fn from(model: EmptyVib) -> Self {
        VibModel::Empty(model)
    }
}

impl From<VibModel> for Mapping {
    fn from(model: VibModel) -> Self {
        model.to_mapping()
    }
}

impl TryFrom<Mapping> for VibModel {
    type Error = ThermoError;

    fn try_from(mapping: Mapping) -> Result<Self> {
        VibModel::from_mapping(&mapping)
    }
}
