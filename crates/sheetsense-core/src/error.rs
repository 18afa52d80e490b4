//! Core error types

use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur when building or accessing tables
#[derive(Debug, Error)]
pub enum TableError {
    /// Duplicate column name in a schema
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Row width does not match the schema
    #[error("Row width mismatch: schema has {expected} columns, row has {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// Column not present in the schema
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
