//! adstock-cli — Command-line interface for half-life adstock transforms.
//!
//! Loads a dated observation table (or an inline series), applies the
//! geometric half-life decay, and prints the transformed series. Logs go to
//! stderr so stdout carries only data.

mod output;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;

use adstock_core::traits::CarryoverTransform;
use adstock_data::{load_observations, save_adstock, values};
use adstock_decay::HalfLifeDecay;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::output::{render_series, render_table, OutputFormat};
use crate::settings::{LogFormat, Settings};

/// Adstock command-line interface.
#[derive(Parser, Debug)]
#[command(name = "adstock-cli")]
#[command(version, about = "Half-life carryover transforms for media time series")]
struct Cli {
    /// Settings file (default: <config_dir>/adstock/adstock.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Transform the value column of a CSV table.
    Transform(TransformArgs),
    /// Transform values given on the command line.
    Series(SeriesArgs),
    /// Print the per-period decay factor for a half-life.
    Factor(FactorArgs),
}

#[derive(Args, Debug)]
struct DecayArgs {
    /// Half-life in periods (default: 2.5).
    #[arg(long)]
    half_life: Option<f64>,

    /// Decimal digits kept in the output (default: 4).
    #[arg(long)]
    rounding: Option<u32>,
}

#[derive(Args, Debug)]
struct TransformArgs {
    /// CSV table with a date column and a numeric column.
    #[arg(short, long)]
    data: PathBuf,

    #[command(flatten)]
    decay: DecayArgs,

    /// Name of the date column (default: date_week).
    #[arg(long)]
    date_column: Option<String>,

    /// Name of the numeric column (default: tv_ad_executions).
    #[arg(long)]
    value_column: Option<String>,

    /// Also write the processed table to this CSV file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format on stdout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct SeriesArgs {
    /// Series values in period order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    #[command(flatten)]
    decay: DecayArgs,

    /// Output format on stdout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct FactorArgs {
    /// Half-life in periods (default: 2.5).
    #[arg(long)]
    half_life: Option<f64>,
}

impl DecayArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(h) = self.half_life {
            settings.half_life = h;
        }
        if let Some(r) = self.rounding {
            settings.rounding = r;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    if let Some(format) = cli.log_format {
        settings.log_format = format;
    }

    init_logging(&settings.log_level, settings.log_format);
    debug!(?settings, "settings resolved");

    let out = io::stdout().lock();
    match cli.command {
        Commands::Transform(args) => transform(args, settings, out),
        Commands::Series(args) => series(args, settings, out),
        Commands::Factor(args) => factor(args, settings, out),
    }
}

fn engine(settings: &Settings) -> Result<HalfLifeDecay> {
    let engine = HalfLifeDecay::new(settings.half_life)
        .context("invalid --half-life")?
        .with_precision(settings.rounding);
    Ok(engine)
}

fn transform<W: Write>(args: TransformArgs, mut settings: Settings, out: W) -> Result<()> {
    args.decay.apply(&mut settings);
    if let Some(column) = args.date_column {
        settings.date_column = column;
    }
    if let Some(column) = args.value_column {
        settings.value_column = column;
    }

    let spec = settings.columns();
    let engine = engine(&settings)?;

    let observations = load_observations(&args.data, &spec)
        .with_context(|| format!("failed to load {}", args.data.display()))?;
    info!(
        rows = observations.len(),
        half_life = settings.half_life,
        rounding = settings.rounding,
        "transforming {}",
        args.data.display()
    );

    let adstock = engine.transform(&values(&observations));

    if let Some(path) = &args.output {
        save_adstock(path, &observations, &adstock, &spec)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("processed table written to {}", path.display());
    }

    render_table(out, args.format, &observations, &adstock, &spec)
}

fn series<W: Write>(args: SeriesArgs, mut settings: Settings, out: W) -> Result<()> {
    args.decay.apply(&mut settings);
    let engine = engine(&settings)?;
    let adstock = engine.transform(&args.values);
    render_series(out, args.format, &args.values, &adstock)
}

fn factor<W: Write>(args: FactorArgs, mut settings: Settings, mut out: W) -> Result<()> {
    if let Some(h) = args.half_life {
        settings.half_life = h;
    }
    let engine = engine(&settings)?;
    writeln!(out, "{}", engine.decay_factor())?;
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_transform() {
        let cli = Cli::try_parse_from([
            "adstock-cli",
            "transform",
            "--data",
            "raw_data.csv",
            "--half-life",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.data, PathBuf::from("raw_data.csv"));
                assert_eq!(args.decay.half_life, Some(3.0));
                assert_eq!(args.decay.rounding, None);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_series_with_negative_values() {
        let cli = Cli::try_parse_from(["adstock-cli", "series", "1", "-2.5", "3", "--rounding", "2"]).unwrap();
        match cli.command {
            Commands::Series(args) => {
                assert_eq!(args.values, vec![1.0, -2.5, 3.0]);
                assert_eq!(args.decay.rounding, Some(2));
                assert_eq!(args.format, OutputFormat::Plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["adstock-cli", "factor", "--half-life", "1", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn transform_requires_data() {
        assert!(Cli::try_parse_from(["adstock-cli", "transform"]).is_err());
    }

    #[test]
    fn log_format_is_validated() {
        let cli = Cli::try_parse_from(["adstock-cli", "factor", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(Cli::try_parse_from(["adstock-cli", "factor", "--log-format", "jsn"]).is_err());
    }

    fn parse(argv: &[&str]) -> Commands {
        let mut full = vec!["adstock-cli"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full).unwrap().command
    }

    fn run(command: Commands, settings: Settings) -> String {
        let mut buf = Vec::new();
        let result = match command {
            Commands::Transform(args) => transform(args, settings, &mut buf),
            Commands::Series(args) => series(args, settings, &mut buf),
            Commands::Factor(args) => factor(args, settings, &mut buf),
        };
        result.unwrap();
        String::from_utf8(buf).unwrap()
    }

    const MEDIA_TABLE: &str = "\
week,tv_ad_executions,radio_spend
2023-01-02,1,10
2023-01-09,1,0
2023-01-16,1,0
";

    #[test]
    fn transform_writes_processed_table_for_named_columns() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("raw_data.csv");
        let processed = dir.path().join("processed_data.csv");
        std::fs::write(&data, MEDIA_TABLE).unwrap();

        let command = parse(&[
            "transform",
            "--data",
            data.to_str().unwrap(),
            "--date-column",
            "week",
            "--value-column",
            "radio_spend",
            "--half-life",
            "2",
            "--output",
            processed.to_str().unwrap(),
        ]);
        let stdout = run(command, Settings::default());

        assert_eq!(stdout, "2023-01-02\t10\n2023-01-09\t7.0711\n2023-01-16\t5\n");
        assert_eq!(
            std::fs::read_to_string(&processed).unwrap(),
            "week,radio_spend,radio_spend_adstock\n2023-01-02,10,10\n2023-01-09,0,7.0711\n2023-01-16,0,5\n"
        );
    }

    #[test]
    fn transform_flags_take_precedence_over_settings() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("raw_data.csv");
        std::fs::write(&data, MEDIA_TABLE).unwrap();

        let settings = Settings {
            half_life: 1.0,
            rounding: 4,
            date_column: "week".into(),
            value_column: "radio_spend".into(),
            ..Settings::default()
        };
        let command = parse(&["transform", "--data", data.to_str().unwrap(), "--half-life", "2", "--rounding", "2"]);
        assert_eq!(run(command, settings), "2023-01-02\t10\n2023-01-09\t7.07\n2023-01-16\t5\n");
    }

    #[test]
    fn transform_reports_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("raw_data.csv");
        let Commands::Transform(args) = parse(&["transform", "--data", data.to_str().unwrap()]) else {
            panic!("expected transform");
        };
        let err = transform(args, Settings::default(), Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load"), "unexpected error: {err:#}");
    }

    #[test]
    fn series_renders_csv() {
        let command = parse(&["series", "10", "0", "0", "--half-life", "2", "--rounding", "2", "--format", "csv"]);
        assert_eq!(run(command, Settings::default()), "value,adstock\n10,10\n0,7.07\n0,5\n");
    }

    #[test]
    fn factor_uses_settings_half_life_without_flag() {
        let settings = Settings { half_life: 1.0, ..Settings::default() };
        assert_eq!(run(parse(&["factor"]), settings), "0.5\n");
    }

    #[test]
    fn factor_rejects_zero_half_life() {
        let Commands::Factor(args) = parse(&["factor", "--half-life", "0"]) else {
            panic!("expected factor");
        };
        assert!(factor(args, Settings::default(), Vec::new()).is_err());
    }

    #[test]
    fn decay_args_override_settings() {
        let mut settings = Settings::default();
        DecayArgs { half_life: Some(4.0), rounding: None }.apply(&mut settings);
        assert_eq!(settings.half_life, 4.0);
        assert_eq!(settings.rounding, 4);
    }

    #[test]
    fn engine_rejects_invalid_half_life() {
        let settings = Settings { half_life: 0.0, ..Settings::default() };
        let err = engine(&settings).unwrap_err();
        assert!(format!("{err:#}").contains("half-life must be finite and positive"));
    }

    #[test]
    fn engine_uses_settings_precision() {
        let settings = Settings { half_life: 1.0, rounding: 2, ..Settings::default() };
        let e = engine(&settings).unwrap();
        assert_eq!(e.precision().digits(), 2);
        assert!((e.decay_factor() - 0.5).abs() < 1e-15);
    }
}
