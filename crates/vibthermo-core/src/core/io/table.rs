use crate::core::statmech::properties::ThermoProperties;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TableWriteError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Writes one CSV row per snapshot, with a header of the property names
/// (`T,q,CvoR,CpoR,UoRT,HoRT,SoR,AoRT,GoRT,ZPE`).
pub fn write_to(rows: &[ThermoProperties], writer: impl Write) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table(path: &Path, rows: &[ThermoProperties]) -> Result<(), TableWriteError> {
    debug!("Writing {} property rows to {:?}", rows.len(), path);
    let to_error = |e: csv::Error| TableWriteError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    };
    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    for row in rows {
        writer.serialize(row).map_err(to_error)?;
    }
    writer.flush().map_err(|e| to_error(e.into()))
}
