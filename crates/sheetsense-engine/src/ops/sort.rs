//! Sort and top-N operations

use crate::error::EngineResult;
use crate::ops::OperationResult;
use crate::resolve::resolve_sort_field;
use sheetsense_core::{CellValue, Table};
use std::cmp::Ordering;

/// Keep the `limit` rows with the largest (or smallest) sort-field values.
///
/// Values are coerced numerically with non-numeric treated as 0. The sort
/// is stable, so ties keep their original relative order.
pub fn top_n(
    table: &Table,
    prompt: &str,
    is_top: bool,
    limit: usize,
) -> EngineResult<OperationResult> {
    let field_idx = resolve_sort_field(prompt, table.schema())?;
    let field_name = table.schema().name(field_idx).unwrap_or_default().to_string();

    let mut indices: Vec<usize> = (0..table.row_count()).collect();
    indices.sort_by(|&a, &b| {
        let ka = numeric_key(table, a, field_idx);
        let kb = numeric_key(table, b, field_idx);
        let ord = ka.partial_cmp(&kb).unwrap_or(Ordering::Equal);
        if is_top {
            ord.reverse()
        } else {
            ord
        }
    });
    indices.truncate(limit);

    let data = table.select_rows(&indices);
    let summary = format!(
        "Showing {} {} records sorted by {}.",
        if is_top { "top" } else { "bottom" },
        data.row_count(),
        field_name
    );

    Ok(OperationResult { data, summary })
}

/// Reorder the full table by the sort field.
///
/// Rows compare numerically when both values parse as numbers, otherwise as
/// case-insensitive text. Stable for equal keys.
pub fn sort_table(table: &Table, prompt: &str, descending: bool) -> EngineResult<OperationResult> {
    let field_idx = resolve_sort_field(prompt, table.schema())?;
    let field_name = table.schema().name(field_idx).unwrap_or_default().to_string();

    let mut indices: Vec<usize> = (0..table.row_count()).collect();
    indices.sort_by(|&a, &b| {
        let ord = compare_cells(
            table.value_at(a, field_idx),
            table.value_at(b, field_idx),
        );
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });

    let data = table.select_rows(&indices);
    let summary = format!(
        "Data sorted by {} in {} order.",
        field_name,
        if descending { "descending" } else { "ascending" }
    );

    Ok(OperationResult { data, summary })
}

fn numeric_key(table: &Table, row: usize, col: usize) -> f64 {
    table
        .value_at(row, col)
        .and_then(|v| v.as_number())
        .unwrap_or(0.0)
}

fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    let numeric = a
        .and_then(|v| v.as_number())
        .zip(b.and_then(|v| v.as_number()));
    if let Some((na, nb)) = numeric {
        return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
    }

    let ta = a.map(|v| v.to_string().to_lowercase()).unwrap_or_default();
    let tb = b.map(|v| v.to_string().to_lowercase()).unwrap_or_default();
    ta.cmp(&tb)
}
