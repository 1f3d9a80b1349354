use std::path::PathBuf;
use thiserror::Error;
use vibthermo::core::error::ThermoError;
use vibthermo::core::io::model_file::ModelFileError;
use vibthermo::core::io::table::TableWriteError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Thermo(#[from] ThermoError),

    #[error(transparent)]
    ModelFile(#[from] ModelFileError),

    #[error(transparent)]
    Table(#[from] TableWriteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
