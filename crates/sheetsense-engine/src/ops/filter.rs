//! Keyword filter operation

use crate::error::EngineResult;
use crate::ops::OperationResult;
use sheetsense_core::Table;

/// Maximum number of rows a filter returns
pub const FILTER_ROW_CAP: usize = 50;

/// Minimum token length for filter keywords
const MIN_TOKEN_LEN: usize = 3;

/// Keep rows where any cell contains any prompt token.
///
/// Tokens are whitespace-separated words longer than three characters;
/// matching is case-insensitive substring. Output is capped at
/// [`FILTER_ROW_CAP`] rows.
pub fn filter_rows(table: &Table, prompt: &str) -> EngineResult<OperationResult> {
    let prompt = prompt.to_lowercase();
    let tokens: Vec<&str> = prompt
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_LEN)
        .collect();

    let mut indices = Vec::new();
    for (row_idx, row) in table.rows().iter().enumerate() {
        let matched = row.iter().any(|cell| {
            let text = cell.to_string().to_lowercase();
            tokens.iter().any(|t| text.contains(t))
        });
        if matched {
            indices.push(row_idx);
            if indices.len() == FILTER_ROW_CAP {
                break;
            }
        }
    }

    let data = table.select_rows(&indices);
    let summary = format!(
        "Filtered data based on criteria, showing {} of {} records.",
        data.row_count(),
        table.row_count()
    );

    Ok(OperationResult { data, summary })
}
