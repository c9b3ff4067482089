//! Error types for pv-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pv-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a delimited table
    #[error("failed to parse table '{path}': {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column required by an extractor is absent
    #[error("column '{column}' not found in '{path}'")]
    MissingColumn { column: String, path: PathBuf },

    /// A cell that should be numeric is not
    #[error("non-numeric value '{value}' in column '{column}' of '{path}'")]
    NonNumeric {
        column: String,
        value: String,
        path: PathBuf,
    },

    /// Aggregating over zero rows
    #[error("no values to aggregate for '{what}' in '{path}'")]
    EmptySelection { what: String, path: PathBuf },

    /// A substitution references a value that was never extracted
    #[error("value '{0}' was not extracted")]
    MissingValue(String),

    /// A value has the wrong kind for the requested formatting
    #[error("value '{0}' is not numeric")]
    NonNumericValue(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
