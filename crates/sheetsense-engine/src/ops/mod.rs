//! Table operations
//!
//! Each operation consumes the input table and a prompt, and produces a new
//! table plus a one-line summary. Input tables are never mutated.

pub mod compare;
pub mod filter;
pub mod group;
pub mod sort;
pub mod stats;

use crate::error::{EngineError, EngineResult};
use crate::intent::{classify_intent, Intent};
use sheetsense_core::Table;

/// Number of rows returned for an unrecognized prompt
pub const SAMPLE_ROWS: usize = 20;

/// Result of a table operation
///
/// `summary` is always non-empty; `data` may have zero rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    pub data: Table,
    pub summary: String,
}

/// Classify the prompt and run the selected operation.
///
/// The only failures are structural: a table with no columns or no rows.
/// Unrecognized prompts fall through to a leading sample.
pub fn analyze(table: &Table, prompt: &str) -> EngineResult<OperationResult> {
    if table.column_count() == 0 {
        return Err(EngineError::NoColumns);
    }
    if table.is_empty() {
        return Err(EngineError::EmptyTable);
    }

    let intent = classify_intent(prompt);
    log::debug!("classified prompt {:?} as {:?}", prompt, intent);

    match intent {
        Intent::GroupAggregate => group::group_aggregate(table, prompt),
        Intent::TopN { is_top, limit } => sort::top_n(table, prompt, is_top, limit),
        Intent::Sort { descending } => sort::sort_table(table, prompt, descending),
        Intent::Statistics => stats::statistics(table),
        Intent::Filter => filter::filter_rows(table, prompt),
        Intent::Compare => compare::compare(table),
        Intent::Sample => Ok(sample(table)),
    }
}

/// Default operation: the first rows, unchanged
fn sample(table: &Table) -> OperationResult {
    let data = table.head(SAMPLE_ROWS);
    let summary = format!(
        "Showing sample of {} records from {} total records.",
        data.row_count(),
        table.row_count()
    );
    OperationResult { data, summary }
}
