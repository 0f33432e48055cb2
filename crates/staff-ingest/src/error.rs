//! Error types for demand table ingestion.

use std::path::PathBuf;

use staff_model::ValidationError;
use thiserror::Error;

use crate::table::Column;

/// Fatal errors that stop a whole table from being read.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("demand file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be opened or read.
    #[error("failed to read demand file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying CSV reader failed.
    #[error("failed to read demand table: {0}")]
    Csv(#[from] csv::Error),

    /// Header row is absent or misshapen.
    #[error("invalid header: {0}")]
    Header(#[from] HeaderError),
}

/// Header row problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("demand table is missing a header row")]
    Missing,

    #[error(
        "expected column '{expected}' at position {position}, but got '{}'",
        .found.as_deref().unwrap_or("N/A")
    )]
    ColumnMismatch {
        position: usize,
        expected: &'static str,
        found: Option<String>,
    },
}

/// Time expressions that do not resolve to an hour-of-day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("time value is empty")]
    Empty,

    #[error("hour '{0}' is outside 0..=24")]
    HourOutOfRange(String),

    #[error("invalid time format: '{0}'")]
    Unrecognized(String),
}

/// Reasons a single data row is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("invalid or incomplete row: expected at least {expected} fields, found {found}")]
    Incomplete { expected: usize, found: usize },

    #[error("malformed row: {0}")]
    Malformed(String),

    #[error("{column} must be an integer, got '{value}'")]
    InvalidInteger { column: Column, value: String },

    #[error("{column} must be positive, got {value}")]
    NotPositive { column: Column, value: i64 },

    #[error("{column} value {value} is too large")]
    TooLarge { column: Column, value: i64 },

    #[error("{column} must be between 1 and 5, got {value}")]
    PriorityOutOfRange { column: Column, value: i64 },

    #[error("{column}: {source}")]
    Time {
        column: Column,
        #[source]
        source: TimeFormatError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
