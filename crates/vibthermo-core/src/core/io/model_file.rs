use crate::core::statmech::model::VibModel;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ModelFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("Invalid model file '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Reads a vibrational model from its JSON mapping.
///
/// # Arguments
///
/// * `reader` - Source of a single JSON object carrying a `class` key.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON, unknown classes, missing
/// attributes, or attributes that fail model validation.
pub fn read_from(reader: impl Read) -> Result<VibModel, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Writes a vibrational model as a pretty-printed JSON mapping.
pub fn write_to(model: &VibModel, mut writer: impl Write) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut writer, model)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}

pub fn read_model(path: &Path) -> Result<VibModel, ModelFileError> {
    debug!("Reading vibrational model from {:?}", path);
    let file = File::open(path).map_err(|e| ModelFileError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_from(BufReader::new(file)).map_err(|e| ModelFileError::Json {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

pub fn write_model(path: &Path, model: &VibModel) -> Result<(), ModelFileError> {
    debug!("Writing {} model to {:?}", model.class(), path);
    let file = File::create(path).map_err(|e| ModelFileError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_to(model, &mut writer)
        .and_then(|_| writer.flush().map_err(serde_json::Error::io))
        .map_err(|e| ModelFileError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
}
