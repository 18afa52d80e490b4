//! Column role inference
//!
//! A column's role is derived, not stored: a prefix of rows is sampled and
//! the column is numeric when a high fraction of the sampled, non-missing
//! values parse as numbers. Classification is deterministic and
//! side-effect-free; callers may cache results for a single table but must
//! not reuse them across tables.

use crate::table::Table;
use crate::{NUMERIC_ROLE_THRESHOLD, ROLE_SAMPLE_ROWS};

/// Inferred semantic role of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Values are predominantly numeric
    Numeric,
    /// Everything else
    Categorical,
}

/// Classify every column of a table, in schema order.
///
/// Samples up to the first [`ROLE_SAMPLE_ROWS`] rows per column. A value is
/// numeric when its text form parses fully as a decimal number. A column is
/// `Numeric` when more than [`NUMERIC_ROLE_THRESHOLD`] of the sampled
/// non-missing values are numeric. An empty table classifies every column
/// as `Categorical` without error.
pub fn classify_columns(table: &Table) -> Vec<ColumnRole> {
    let sample_len = table.row_count().min(ROLE_SAMPLE_ROWS);

    (0..table.column_count())
        .map(|col| {
            let mut sampled = 0usize;
            let mut numeric = 0usize;

            for row in 0..sample_len {
                let value = match table.value_at(row, col) {
                    Some(v) => v,
                    None => continue,
                };
                if value.is_missing() {
                    continue;
                }
                sampled += 1;
                if value.as_number().is_some() {
                    numeric += 1;
                }
            }

            if sampled > 0 && (numeric as f64) > (sampled as f64) * NUMERIC_ROLE_THRESHOLD {
                ColumnRole::Numeric
            } else {
                ColumnRole::Categorical
            }
        })
        .collect()
}

/// Indices of the columns classified [`ColumnRole::Numeric`]
pub fn numeric_columns(table: &Table) -> Vec<usize> {
    classify_columns(table)
        .into_iter()
        .enumerate()
        .filter(|(_, role)| *role == ColumnRole::Numeric)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::value::CellValue;

    fn table(rows: Vec<Vec<CellValue>>) -> Table {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let names = (0..width).map(|i| format!("c{}", i)).collect();
        Table::with_rows(Schema::new(names).unwrap(), rows).unwrap()
    }

    #[test]
    fn test_numeric_and_categorical() {
        let t = table(vec![
            vec![CellValue::text("North"), CellValue::text("12")],
            vec![CellValue::text("South"), CellValue::text("7.5")],
            vec![CellValue::text("East"), CellValue::text("3")],
        ]);
        assert_eq!(
            classify_columns(&t),
            vec![ColumnRole::Categorical, ColumnRole::Numeric]
        );
        assert_eq!(numeric_columns(&t), vec![1]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 7 of 10 numeric is exactly the 0.7 fraction, not above it
        let mut rows = Vec::new();
        for i in 0..7 {
            rows.push(vec![CellValue::text(format!("{}", i))]);
        }
        for _ in 0..3 {
            rows.push(vec![CellValue::text("n/a")]);
        }
        let t = table(rows);
        assert_eq!(classify_columns(&t), vec![ColumnRole::Categorical]);
    }

    #[test]
    fn test_missing_values_excluded_from_sample() {
        let t = table(vec![
            vec![CellValue::text("5")],
            vec![CellValue::Empty],
            vec![CellValue::text("")],
            vec![CellValue::text("6")],
        ]);
        assert_eq!(classify_columns(&t), vec![ColumnRole::Numeric]);
    }

    #[test]
    fn test_empty_table() {
        let t = Table::new(Schema::new(vec!["a".into()]).unwrap());
        assert_eq!(classify_columns(&t), vec![ColumnRole::Categorical]);

        let no_cols = Table::new(Schema::new(vec![]).unwrap());
        assert!(classify_columns(&no_cols).is_empty());
    }

    #[test]
    fn test_only_first_ten_rows_sampled() {
        // First 10 rows numeric, the rest text: still numeric
        let mut rows: Vec<Vec<CellValue>> =
            (0..10).map(|i| vec![CellValue::Number(i as f64)]).collect();
        for _ in 0..30 {
            rows.push(vec![CellValue::text("word")]);
        }
        let t = table(rows);
        assert_eq!(classify_columns(&t), vec![ColumnRole::Numeric]);
    }
}
