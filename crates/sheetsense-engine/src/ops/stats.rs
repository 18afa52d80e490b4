//! Descriptive statistics operation

use crate::error::EngineResult;
use crate::ops::OperationResult;
use sheetsense_core::{numeric_columns, CellValue, Schema, Table};
use std::cmp::Ordering;

/// One summary row of descriptive statistics per numeric column.
///
/// Emits count, sum, average, median, min, and max keyed as
/// `<column>_<metric>`. The median is the element at index `n/2` of the
/// sorted values; even counts take the upper-middle element, never an
/// interpolated value.
pub fn statistics(table: &Table) -> EngineResult<OperationResult> {
    let numeric = numeric_columns(table);

    let mut names = vec!["metric".to_string()];
    let mut row = vec![CellValue::text("Statistics")];

    for &col in &numeric {
        let name = table.schema().name(col).unwrap_or_default();
        let mut values: Vec<f64> = table
            .column_values(col)
            .filter_map(|v| v.as_number())
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let median = values[count / 2];

        names.push(format!("{}_count", name));
        row.push(CellValue::Number(count as f64));
        names.push(format!("{}_sum", name));
        row.push(CellValue::text(format!("{:.2}", sum)));
        names.push(format!("{}_average", name));
        row.push(CellValue::text(format!("{:.2}", sum / count as f64)));
        names.push(format!("{}_median", name));
        row.push(CellValue::Number(median));
        names.push(format!("{}_min", name));
        row.push(CellValue::Number(values[0]));
        names.push(format!("{}_max", name));
        row.push(CellValue::Number(values[count - 1]));
    }

    let schema = Schema::new(names)?;
    let data = Table::with_rows(schema, vec![row])?;
    let summary = format!(
        "Statistical analysis of {} numeric fields across {} records.",
        numeric.len(),
        table.row_count()
    );

    Ok(OperationResult { data, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table_of(values: &[&str]) -> Table {
        let schema = Schema::new(vec!["v".into()]).unwrap();
        let rows = values.iter().map(|v| vec![CellValue::text(*v)]).collect();
        Table::with_rows(schema, rows).unwrap()
    }

    #[test]
    fn test_median_is_not_interpolated() {
        let result = statistics(&table_of(&["1", "2", "3", "4"])).unwrap();
        // Sorted index 4/2 = 2, so the median of [1,2,3,4] is 3, not 2.5
        assert_eq!(result.data.value(0, "v_median"), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_metrics() {
        let result = statistics(&table_of(&["4", "1", "3"])).unwrap();
        assert_eq!(result.data.row_count(), 1);
        assert_eq!(result.data.value(0, "metric"), Some(&CellValue::text("Statistics")));
        assert_eq!(result.data.value(0, "v_count"), Some(&CellValue::Number(3.0)));
        assert_eq!(result.data.value(0, "v_sum"), Some(&CellValue::text("8.00")));
        assert_eq!(result.data.value(0, "v_average"), Some(&CellValue::text("2.67")));
        assert_eq!(result.data.value(0, "v_median"), Some(&CellValue::Number(3.0)));
        assert_eq!(result.data.value(0, "v_min"), Some(&CellValue::Number(1.0)));
        assert_eq!(result.data.value(0, "v_max"), Some(&CellValue::Number(4.0)));
        assert_eq!(
            result.summary,
            "Statistical analysis of 1 numeric fields across 3 records."
        );
    }

    #[test]
    fn test_no_numeric_columns() {
        let schema = Schema::new(vec!["label".into()]).unwrap();
        let table = Table::with_rows(
            schema,
            vec![vec![CellValue::text("x")], vec![CellValue::text("y")]],
        )
        .unwrap();

        let result = statistics(&table).unwrap();
        assert_eq!(result.data.column_count(), 1);
        assert_eq!(result.data.row_count(), 1);
    }
}
