//! Error types for registration export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the registration export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Export file not found or not a file.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Underlying CSV reader failure (I/O or malformed CSV framing).
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data row carries fewer cells than the schema requires.
    ///
    /// `row` is the 0-based index within the file, headers included, so it
    /// matches what an operator sees in a spreadsheet minus one. `column`
    /// names the first cell the schema expected but the row lacks.
    #[error(
        "row {row} has {found} of {expected} cells, first missing column: {column}"
    )]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
        column: &'static str,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
