//! Layered settings for the command-line interface.
//!
//! Precedence, lowest first: built-in defaults, the optional settings file,
//! `ADSTOCK_*` environment variables, then command-line flags (applied by
//! the caller).

use std::path::{Path, PathBuf};

use adstock_core::constants::{
    DEFAULT_DATE_COLUMN, DEFAULT_HALF_LIFE, DEFAULT_ROUNDING, DEFAULT_VALUE_COLUMN,
};
use adstock_data::ColumnSpec;
use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `ADSTOCK_HALF_LIFE=3`.
const ENV_PREFIX: &str = "ADSTOCK";

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub half_life: f64,
    pub rounding: u32,
    pub date_column: String,
    pub value_column: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            half_life: DEFAULT_HALF_LIFE,
            rounding: DEFAULT_ROUNDING,
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Load defaults, then `file` (or the default settings path), then the
    /// environment. A missing file is not an error.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let path = file.map(Path::to_path_buf).or_else(default_path);
        Self::from_sources(path.as_deref(), true)
    }

    pub fn from_sources(file: Option<&Path>, with_env: bool) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("half_life", defaults.half_life)?
            .set_default("rounding", i64::from(defaults.rounding))?
            .set_default("date_column", defaults.date_column)?
            .set_default("value_column", defaults.value_column)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        builder.build()?.try_deserialize()
    }

    pub fn columns(&self) -> ColumnSpec {
        ColumnSpec::new(&self.date_column, &self.value_column)
    }
}

/// `<config_dir>/adstock/adstock.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("adstock").join("adstock.toml"))
}
