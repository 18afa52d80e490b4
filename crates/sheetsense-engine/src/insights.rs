//! Dataset insights
//!
//! Short observations appended to analysis summaries: dataset size, how
//! many numeric fields were found, and the field with the most distinct
//! values.

use ahash::AHashSet;
use sheetsense_core::{numeric_columns, Table};

/// Row count above which the dataset is called out as large
const LARGE_DATASET_ROWS: usize = 1000;

/// Build insight text for a table. Empty string when there is nothing to
/// say.
pub fn generate_insights(table: &Table) -> String {
    let mut insights = Vec::new();

    if table.row_count() > LARGE_DATASET_ROWS {
        insights.push(format!("Large dataset with {} records.", table.row_count()));
    }

    let numeric = numeric_columns(table);
    if !numeric.is_empty() {
        insights.push(format!(
            "Found {} numeric fields for analysis.",
            numeric.len()
        ));
    }

    if let Some(name) = most_diverse_field(table) {
        insights.push(format!("Most diverse field: {}.", name));
    }

    insights.join(" ")
}

/// Column with the most distinct text values; ties keep the earlier column
fn most_diverse_field(table: &Table) -> Option<&str> {
    if table.is_empty() {
        return None;
    }

    let mut best = None;
    let mut best_unique = 0;
    for col in 0..table.column_count() {
        let unique: AHashSet<String> =
            table.column_values(col).map(|v| v.to_string()).collect();
        if unique.len() > best_unique {
            best_unique = unique.len();
            best = Some(col);
        }
    }

    best.and_then(|col| table.schema().name(col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsense_core::{CellValue, Schema};

    #[test]
    fn test_insights_small_table() {
        let schema = Schema::new(vec!["id".into(), "status".into()]).unwrap();
        let table = Table::with_rows(
            schema,
            vec![
                vec![CellValue::text("1"), CellValue::text("open")],
                vec![CellValue::text("2"), CellValue::text("open")],
                vec![CellValue::text("3"), CellValue::text("closed")],
            ],
        )
        .unwrap();

        let insights = generate_insights(&table);
        assert_eq!(
            insights,
            "Found 1 numeric fields for analysis. Most diverse field: id."
        );
    }

    #[test]
    fn test_large_dataset_called_out() {
        let schema = Schema::new(vec!["v".into()]).unwrap();
        let rows = (0..1500).map(|i| vec![CellValue::text(i.to_string())]).collect();
        let table = Table::with_rows(schema, rows).unwrap();

        let insights = generate_insights(&table);
        assert!(insights.starts_with("Large dataset with 1500 records."));
    }

    #[test]
    fn test_empty_table_has_no_diversity() {
        let table = Table::new(Schema::new(vec!["a".into()]).unwrap());
        assert_eq!(generate_insights(&table), "");
    }
}
