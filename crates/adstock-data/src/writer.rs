//! Export of processed tables: period, raw value and adstocked value.

use std::io::Write;
use std::path::Path;

use adstock_core::error::DataError;
use csv::Writer;
use tracing::debug;

use crate::observation::{ColumnSpec, Observation};

/// Write `<date>,<value>,<value>_adstock` rows for each observation.
///
/// `adstock` must be the transform of `observations` and therefore have the
/// same length.
pub fn write_adstock<W: Write>(
    writer: W,
    observations: &[Observation],
    adstock: &[f32],
    spec: &ColumnSpec,
) -> Result<(), DataError> {
    if observations.len() != adstock.len() {
        return Err(DataError::LengthMismatch {
            observations: observations.len(),
            values: adstock.len(),
        });
    }

    let mut wtr = Writer::from_writer(writer);
    wtr.write_record([
        spec.date_column.as_str(),
        spec.value_column.as_str(),
        spec.adstock_column().as_str(),
    ])
    .map_err(|e| DataError::Csv(e.to_string()))?;

    for (obs, value) in observations.iter().zip(adstock) {
        wtr.write_record([
            obs.date.format("%Y-%m-%d").to_string(),
            obs.value.to_string(),
            value.to_string(),
        ])
        .map_err(|e| DataError::Csv(e.to_string()))?;
    }
    wtr.flush()?;

    debug!(rows = observations.len(), column = %spec.adstock_column(), "wrote processed table");
    Ok(())
}

/// Write the processed table to `path`, creating or truncating it.
pub fn save_adstock(
    path: impl AsRef<Path>,
    observations: &[Observation],
    adstock: &[f32],
    spec: &ColumnSpec,
) -> Result<(), DataError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_adstock(file, observations, adstock, spec)
}
