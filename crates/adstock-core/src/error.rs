//! Error types for adstock transforms and their data collaborators.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecayError {
    #[error("half-life must be finite and positive, got {0}")] InvalidHalfLife(f64),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O: {0}")] Io(#[from] std::io::Error),
    #[error("csv: {0}")] Csv(String),
    #[error("missing column: {column}")] MissingColumn { column: String },
    /// `line` is the 1-based line in the source file, header included.
    #[error("invalid date at line {line}: {value:?}")] InvalidDate { line: u64, value: String },
    #[error("invalid value in column {column} at line {line}: {value:?}")] InvalidValue { line: u64, column: String, value: String },
    #[error("length mismatch: {observations} observations, {values} values")] LengthMismatch { observations: usize, values: usize },
}
