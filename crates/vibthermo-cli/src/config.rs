use crate::cli::ModelArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use vibthermo::core::io::model_file;
use vibthermo::core::statmech::empty::EmptyVib;
use vibthermo::core::statmech::harmonic::HarmonicVib;
use vibthermo::core::statmech::model::VibModel;
use vibthermo::core::statmech::qrrho::{self, QrrhoVib, RotorInertia};
use vibthermo::workflows::sweep;

/// Temperature used when neither the run file nor the command line gives one.
pub const DEFAULT_TEMPERATURE: f64 = 298.15;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case", tag = "type", deny_unknown_fields)]
enum PartialModelConfig {
    Harmonic {
        #[serde(rename = "vib-wavenumbers")]
        vib_wavenumbers: Vec<f64>,
    },
    Qrrho {
        #[serde(rename = "vib-wavenumbers")]
        vib_wavenumbers: Vec<f64>,
        alpha: Option<u32>,
        bav: Option<f64>,
        v0: Option<f64>,
        #[serde(rename = "rotor-inertia")]
        rotor_inertia: Option<RotorInertia>,
    },
    Empty,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialTemperatureConfig {
    values: Option<Vec<f64>>,
    start: Option<f64>,
    end: Option<f64>,
    step: Option<f64>,
}

/// QRRHO parameters supplied through `--set`.
#[derive(Debug, Default, Clone, PartialEq)]
struct ModelOverrides {
    alpha: Option<u32>,
    bav: Option<f64>,
    v0: Option<f64>,
    rotor_inertia: Option<RotorInertia>,
}

impl ModelOverrides {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    model: Option<PartialModelConfig>,
    temperatures: Option<PartialTemperatureConfig>,
    #[serde(skip)]
    overrides: ModelOverrides,
}

/// Fully resolved inputs of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub model: VibModel,
    pub temperatures: Vec<f64>,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading run configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the run file named by `args`, or starts from an empty
    /// configuration when none is given.
    pub fn load(args: &ModelArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &ModelArgs, cli_temperatures: &[f64]) -> Result<RunConfig> {
        self.apply_set_values(&args.set_values)?;

        let model = match &args.model {
            Some(path) => {
                if self.model.is_some() {
                    debug!("--model overrides the [model] section of the run file.");
                }
                model_file::read_model(path)?
            }
            None => self
                .model
                .take()
                .ok_or_else(|| {
                    CliError::Config(
                        "A model is required either in the `[model]` section of the config file or via --model."
                            .to_string(),
                    )
                })?
                .build()?,
        };
        let model = Self::apply_overrides(model, &self.overrides)?;

        let temperatures = if !cli_temperatures.is_empty() {
            cli_temperatures.to_vec()
        } else {
            Self::resolve_temperatures(self.temperatures.take().unwrap_or_default())?
        };

        Ok(RunConfig {
            model,
            temperatures,
        })
    }

    fn resolve_temperatures(partial: PartialTemperatureConfig) -> Result<Vec<f64>> {
        let mut temperatures = partial.values.unwrap_or_default();
        match (partial.start, partial.end, partial.step) {
            (Some(start), Some(end), Some(step)) => {
                temperatures.extend(sweep::temperature_grid(start, end, step)?);
            }
            (None, None, None) => {}
            _ => {
                return Err(CliError::Config(
                    "A temperature range requires all of `start`, `end` and `step`.".to_string(),
                ));
            }
        }
        if temperatures.is_empty() {
            debug!(
                "No temperatures configured; using the default of {} K.",
                DEFAULT_TEMPERATURE
            );
            temperatures.push(DEFAULT_TEMPERATURE);
        }
        Ok(temperatures)
    }

    fn apply_overrides(model: VibModel, overrides: &ModelOverrides) -> Result<VibModel> {
        if overrides.is_empty() {
            return Ok(model);
        }
        match model {
            VibModel::Qrrho(qrrho) => {
                let rebuilt = QrrhoVib::with_parameters(
                    qrrho.vib_wavenumbers().to_vec(),
                    overrides.alpha.unwrap_or(qrrho.alpha()),
                    overrides.bav.unwrap_or(qrrho.bav()),
                    overrides.v0.unwrap_or(qrrho.v0()),
                )?
                .with_rotor_inertia(overrides.rotor_inertia.unwrap_or(qrrho.rotor_inertia()));
                Ok(rebuilt.into())
            }
            other => Err(CliError::Config(format!(
                "QRRHO parameters cannot be set on a {} model.",
                other.class()
            ))),
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        if set_values.is_empty() {
            return Ok(());
        }
        for kv_pair in set_values {
            let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            }
            let key = parts[0];
            let value_str = parts[1];

            let parse_float = || -> Result<f64> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })
            };

            match key {
                "model.alpha" => {
                    self.overrides.alpha = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "model.bav" => {
                    self.overrides.bav = Some(parse_float()?);
                }
                "model.v0" => {
                    self.overrides.v0 = Some(parse_float()?);
                }
                "model.rotor-inertia" => {
                    self.overrides.rotor_inertia = Some(value_str.parse()?);
                }
                "temperatures.start" => {
                    self.temperatures
                        .get_or_insert_with(Default::default)
                        .start = Some(parse_float()?);
                }
                "temperatures.end" => {
                    self.temperatures.get_or_insert_with(Default::default).end =
                        Some(parse_float()?);
                }
                "temperatures.step" => {
                    self.temperatures
                        .get_or_insert_with(Default::default)
                        .step = Some(parse_float()?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

impl PartialModelConfig {
    fn build(self) -> Result<VibModel> {
        let model = match self {
            PartialModelConfig::Harmonic { vib_wavenumbers } => {
                HarmonicVib::new(vib_wavenumbers)?.into()
            }
            PartialModelConfig::Qrrho {
                vib_wavenumbers,
                alpha,
                bav,
                v0,
                rotor_inertia,
            } => {
                QrrhoVib::with_parameters(
                    vib_wavenumbers,
                    alpha.unwrap_or(qrrho::DEFAULT_ALPHA),
                    bav.unwrap_or(qrrho::DEFAULT_BAV),
                    v0.unwrap_or(qrrho::DEFAULT_V0),
                )?
                .with_rotor_inertia(rotor_inertia.unwrap_or_default())
                .into()
            }
            PartialModelConfig::Empty => EmptyVib.into(),
        };
        Ok(model)
    }
}
