//! Observation rows and column naming for dated series tables.

use adstock_core::constants::{ADSTOCK_COLUMN_SUFFIX, DEFAULT_DATE_COLUMN, DEFAULT_VALUE_COLUMN};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Accepted date layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Accepted datetime layouts; only the date part is kept.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One period of the input series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// Column names locating the period and the numeric series in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub date_column: String,
    pub value_column: String,
}

impl ColumnSpec {
    pub fn new(date_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            date_column: date_column.into(),
            value_column: value_column.into(),
        }
    }

    /// Name of the transformed column in processed tables, e.g.
    /// `tv_ad_executions_adstock`.
    pub fn adstock_column(&self) -> String {
        format!("{}{}", self.value_column, ADSTOCK_COLUMN_SUFFIX)
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_COLUMN, DEFAULT_VALUE_COLUMN)
    }
}

/// Extract the numeric series in period order.
pub fn values(observations: &[Observation]) -> Vec<f64> {
    observations.iter().map(|o| o.value).collect()
}

/// Parse a period cell. Returns `None` if no accepted layout matches.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}
