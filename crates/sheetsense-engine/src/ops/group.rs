//! Group-and-aggregate operation

use crate::error::EngineResult;
use crate::ops::OperationResult;
use crate::resolve::{resolve_field, CATEGORY_KEYWORDS};
use ahash::AHashMap;
use sheetsense_core::{numeric_columns, CellValue, Schema, Table};

/// Key for rows whose grouping value is missing
pub const MISSING_GROUP_KEY: &str = "Unknown";

/// Group rows by the resolved field and aggregate numeric columns.
///
/// One output row per distinct key, in order of first occurrence. Each row
/// carries the key, a count, the share of total rows, and avg/sum/max/min
/// for every numeric column.
pub fn group_aggregate(table: &Table, prompt: &str) -> EngineResult<OperationResult> {
    let field_idx = resolve_field(prompt, table.schema(), CATEGORY_KEYWORDS)?;
    let field_name = table.schema().name(field_idx).unwrap_or_default().to_string();
    let numeric = numeric_columns(table);
    let groups = group_rows(table, field_idx);

    let mut names = vec![field_name.clone(), "count".to_string(), "percentage".to_string()];
    for &col in &numeric {
        let col_name = table.schema().name(col).unwrap_or_default();
        names.push(format!("avg_{}", col_name));
        names.push(format!("sum_{}", col_name));
        names.push(format!("max_{}", col_name));
        names.push(format!("min_{}", col_name));
    }
    let schema = Schema::new(names)?;

    let total = table.row_count() as f64;
    let mut out = Table::new(schema);
    for (key, indices) in &groups {
        let count = indices.len();
        let mut row = vec![
            CellValue::text(key.clone()),
            CellValue::Number(count as f64),
            CellValue::text(format!("{:.1}%", count as f64 / total * 100.0)),
        ];

        for &col in &numeric {
            let values = collect_numeric(table, indices, col);
            if values.is_empty() {
                row.extend([CellValue::Empty, CellValue::Empty, CellValue::Empty, CellValue::Empty]);
            } else {
                let sum: f64 = values.iter().sum();
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                row.push(CellValue::text(format!("{:.2}", sum / values.len() as f64)));
                row.push(CellValue::text(format!("{:.2}", sum)));
                row.push(CellValue::Number(max));
                row.push(CellValue::Number(min));
            }
        }

        out.push_row(row)?;
    }

    let summary = format!(
        "Grouped {} records by {} into {} categories.",
        table.row_count(),
        field_name,
        groups.len()
    );

    Ok(OperationResult { data: out, summary })
}

/// Partition row indices by a column's text value, missing values keyed as
/// "Unknown". Group order is insertion order of first occurrence.
pub(crate) fn group_rows(table: &Table, field: usize) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut seen: AHashMap<String, usize> = AHashMap::new();

    for (row_idx, row) in table.rows().iter().enumerate() {
        let key = match row.get(field) {
            Some(v) if !v.is_missing() => v.to_string(),
            _ => MISSING_GROUP_KEY.to_string(),
        };

        match seen.get(&key) {
            Some(&g) => groups[g].1.push(row_idx),
            None => {
                seen.insert(key.clone(), groups.len());
                groups.push((key, vec![row_idx]));
            }
        }
    }

    groups
}

fn collect_numeric(table: &Table, indices: &[usize], col: usize) -> Vec<f64> {
    indices
        .iter()
        .filter_map(|&i| table.value_at(i, col))
        .filter_map(|v| v.as_number())
        .collect()
}
