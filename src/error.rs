//! Error types, one enum per concern.

use std::path::PathBuf;

/// Failure to turn user input into a usable sample.
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum SampleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file contains no data records")]
    EmptyFile,

    #[error("Column `{column}` not found in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Please enter valid numeric values")]
    NoValues,

    #[error("X and Y arrays must have the same length (got {x} and {y})")]
    LengthMismatch { x: usize, y: usize },
}

/// Failure to fit a regression line.
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum RegressionError {
    #[error("All X values are identical, the slope is undefined")]
    ConstantX,

    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// An error with the analysis configuration.
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Failure while writing a report.
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON writing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Nothing to report: compute statistics or a regression first")]
    Empty,
}
