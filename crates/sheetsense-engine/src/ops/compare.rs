//! Categorical comparison operation

use crate::error::EngineResult;
use crate::ops::group::group_rows;
use crate::ops::OperationResult;
use sheetsense_core::{numeric_columns, CellValue, Schema, Table};

/// Group by the first categorical column and emit per-group counts plus
/// per-numeric-column averages.
pub fn compare(table: &Table) -> EngineResult<OperationResult> {
    let numeric = numeric_columns(table);
    let cat_idx = (0..table.column_count())
        .find(|c| !numeric.contains(c))
        .unwrap_or(0);
    let cat_name = table.schema().name(cat_idx).unwrap_or_default().to_string();

    let mut names = vec![cat_name, "count".to_string()];
    for &col in &numeric {
        names.push(format!("avg_{}", table.schema().name(col).unwrap_or_default()));
    }
    let schema = Schema::new(names)?;

    let groups = group_rows(table, cat_idx);
    let mut out = Table::new(schema);
    for (key, indices) in groups {
        let mut row = vec![
            CellValue::text(key),
            CellValue::Number(indices.len() as f64),
        ];
        for &col in &numeric {
            let values: Vec<f64> = indices
                .iter()
                .filter_map(|&i| table.value_at(i, col))
                .filter_map(|v| v.as_number())
                .collect();
            if values.is_empty() {
                row.push(CellValue::Empty);
            } else {
                let avg = values.iter().sum::<f64>() / values.len() as f64;
                row.push(CellValue::text(format!("{:.2}", avg)));
            }
        }
        out.push_row(row)?;
    }

    Ok(OperationResult {
        data: out,
        summary: "Comparative analysis showing key differences and patterns.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compare_groups_first_categorical() {
        let schema =
            Schema::new(vec!["amount".into(), "region".into()]).unwrap();
        let table = Table::with_rows(
            schema,
            vec![
                vec![CellValue::text("10"), CellValue::text("north")],
                vec![CellValue::text("20"), CellValue::text("north")],
                vec![CellValue::text("30"), CellValue::text("south")],
            ],
        )
        .unwrap();

        let result = compare(&table).unwrap();
        // "amount" is numeric, so "region" is the grouping key
        assert_eq!(result.data.value(0, "region"), Some(&CellValue::text("north")));
        assert_eq!(result.data.value(0, "count"), Some(&CellValue::Number(2.0)));
        assert_eq!(result.data.value(0, "avg_amount"), Some(&CellValue::text("15.00")));
        assert_eq!(result.data.value(1, "region"), Some(&CellValue::text("south")));
    }

    #[test]
    fn test_all_numeric_falls_back_to_first() {
        let schema = Schema::new(vec!["a".into(), "b".into()]).unwrap();
        let table = Table::with_rows(
            schema,
            vec![
                vec![CellValue::text("1"), CellValue::text("2")],
                vec![CellValue::text("1"), CellValue::text("4")],
            ],
        )
        .unwrap();

        let result = compare(&table).unwrap();
        assert_eq!(result.data.value(0, "a"), Some(&CellValue::text("1")));
        assert_eq!(result.data.value(0, "count"), Some(&CellValue::Number(2.0)));
    }
}
