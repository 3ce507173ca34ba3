//! Rendering of transformed series to standard output.

use std::io::Write;

use adstock_data::{write_adstock, ColumnSpec, Observation};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One transformed value per line.
    #[default]
    Plain,
    /// JSON array of row objects.
    Json,
    /// CSV table with the raw and transformed columns.
    Csv,
}

#[derive(Serialize)]
struct SeriesRow {
    value: f64,
    adstock: f32,
}

#[derive(Serialize)]
struct TableRow<'a> {
    #[serde(flatten)]
    observation: &'a Observation,
    adstock: f32,
}

/// Render an inline series and its transform.
pub fn render_series<W: Write>(mut out: W, format: OutputFormat, input: &[f64], adstock: &[f32]) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for v in adstock {
                writeln!(out, "{v}")?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<SeriesRow> = input
                .iter()
                .zip(adstock)
                .map(|(&value, &adstock)| SeriesRow { value, adstock })
                .collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut out);
            wtr.write_record(["value", "adstock"])?;
            for (value, adstock) in input.iter().zip(adstock) {
                wtr.write_record([value.to_string(), adstock.to_string()])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Render a loaded table and its transform.
pub fn render_table<W: Write>(
    mut out: W,
    format: OutputFormat,
    observations: &[Observation],
    adstock: &[f32],
    spec: &ColumnSpec,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for (obs, v) in observations.iter().zip(adstock) {
                writeln!(out, "{}\t{v}", obs.date)?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<TableRow<'_>> = observations
                .iter()
                .zip(adstock)
                .map(|(observation, &adstock)| TableRow { observation, adstock })
                .collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_adstock(out, observations, adstock, spec)?,
    }
    Ok(())
}
