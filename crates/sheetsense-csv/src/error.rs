//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input with no header record
    #[error("Missing header record")]
    MissingHeader,

    /// Table construction error (duplicate header names)
    #[error("Table error: {0}")]
    Table(#[from] sheetsense_core::TableError),
}
