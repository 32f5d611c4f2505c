//! Error types for service name ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and filtering the names CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file could not be opened.
    #[error("failed to open {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be read after opening.
    #[error("failed to read {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV parser rejected the data.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no rows, not even a header.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Required column not present in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Row has fewer fields than the highest referenced column.
    #[error("row {row} of {path} has {actual} fields, expected at least {expected}")]
    ShortRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        actual: usize,
    },

    // === Data Errors ===
    /// Two accepted rows produce the same constant name.
    #[error("duplicate identifier '{name}' in {path}: rows {first_row} and {row}")]
    DuplicateIdentifier {
        path: PathBuf,
        name: String,
        first_row: usize,
        row: usize,
    },
}

impl IngestError {
    /// Pipeline stage this error belongs to, used in diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::FileOpen { .. } | Self::FileRead { .. } => "read",
            Self::CsvParse { .. } | Self::EmptyCsv { .. } => "parse",
            Self::MissingColumn { .. } | Self::ShortRow { .. } => "schema",
            Self::DuplicateIdentifier { .. } => "filter",
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
