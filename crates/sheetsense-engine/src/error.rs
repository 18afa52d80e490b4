//! Engine error types

use sheetsense_core::TableError;
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during analysis
///
/// Only structurally invalid input fails; an unrecognized prompt falls
/// through to a deterministic default instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Table with zero columns; nothing can be resolved against it
    #[error("Table has no columns")]
    NoColumns,

    /// Table with zero rows
    #[error("Table has no rows")]
    EmptyTable,

    /// Result table construction error
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}
