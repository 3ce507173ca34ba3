//! Transform defaults and numeric limits.

/// Decimal digits kept in transformed output unless the caller asks otherwise.
pub const DEFAULT_ROUNDING: u32 = 4;

/// Half-life (in periods) used by the command-line entry point when none is given.
///
/// 2.5 weeks is a common starting point for TV media in mix models.
pub const DEFAULT_HALF_LIFE: f64 = 2.5;

/// Largest meaningful rounding precision.
///
/// `10^308` is the largest power of ten representable as an `f64`; any
/// larger request is clamped to this.
pub const MAX_ROUNDING_DIGITS: u32 = 308;

/// Fraction of the original weight remaining after one half-life.
pub const HALF: f64 = 0.5;

/// Default name of the period column in observation tables.
pub const DEFAULT_DATE_COLUMN: &str = "date_week";

/// Default name of the numeric column in observation tables.
pub const DEFAULT_VALUE_COLUMN: &str = "tv_ad_executions";

/// Suffix appended to the value column name in processed tables.
pub const ADSTOCK_COLUMN_SUFFIX: &str = "_adstock";
