//! CSV reader for dated observation tables.
//!
//! The table must have a header row. The period and value columns are
//! located by name; any other columns are ignored. Rows keep file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use adstock_core::error::DataError;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::observation::{parse_date, ColumnSpec, Observation};

/// Read observations from any CSV source.
///
/// Errors and log events carry the 1-based file line of the offending
/// record, so blank lines and the header are counted. An empty value cell
/// loads as `NaN`.
pub fn read_observations<R: Read>(reader: R, spec: &ColumnSpec) -> Result<Vec<Observation>, DataError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| DataError::Csv(e.to_string()))?
        .clone();
    let date_idx = column_index(&headers, &spec.date_column)?;
    let value_idx = column_index(&headers, &spec.value_column)?;

    let mut observations: Vec<Observation> = Vec::new();
    for rec in rdr.records() {
        let record = rec.map_err(|e| DataError::Csv(e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());

        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| DataError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        let raw_value = record.get(value_idx).unwrap_or_default();
        let value = if raw_value.is_empty() {
            warn!(line, column = %spec.value_column, "empty value cell loaded as NaN");
            f64::NAN
        } else {
            raw_value.parse::<f64>().map_err(|_| DataError::InvalidValue {
                line,
                column: spec.value_column.clone(),
                value: raw_value.to_string(),
            })?
        };

        if let Some(prev) = observations.last() {
            if date <= prev.date {
                warn!(line, %date, previous = %prev.date, "periods are not strictly increasing");
            }
        }
        observations.push(Observation { date, value });
    }

    debug!(rows = observations.len(), column = %spec.value_column, "loaded observations");
    Ok(observations)
}

/// Read observations from a CSV file.
pub fn load_observations(path: impl AsRef<Path>, spec: &ColumnSpec) -> Result<Vec<Observation>, DataError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening observation table");
    let file = File::open(path)?;
    read_observations(file, spec)
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DataError::MissingColumn { column: column.to_string() })
}
