//! Formula error types

use sheetsense_core::TableError;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Formula parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Formula evaluation error
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Identifier that is neither a column of the current row nor a known name
    #[error("Unknown name: {0}")]
    UnknownName(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Structurally invalid input (empty formula, table with no rows/columns)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Table construction error while writing results
    #[error(transparent)]
    Table(#[from] TableError),
}
