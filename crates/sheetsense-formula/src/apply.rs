//! Per-row formula application
//!
//! A formula is parsed once, then evaluated independently against every row
//! of the table. The results land in a target column: appended when the name
//! is new, overwritten when it already exists.

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{evaluate, EvaluationContext};
use crate::parser::parse_formula;
use sheetsense_core::{CellError, CellValue, Table};

/// Apply `formula` to every row of `table`, writing results into
/// `target_column`.
///
/// Structural problems (an empty formula, a table with no rows or no
/// columns) abort with an error. A formula that fails to parse, or fails
/// to evaluate for a particular row, does not: those rows receive the
/// `#ERROR` sentinel and processing continues, so one bad row never
/// discards the rest of the column.
pub fn apply_formula(table: &Table, formula: &str, target_column: &str) -> FormulaResult<Table> {
    if formula.trim().is_empty() {
        return Err(FormulaError::InvalidInput("formula is empty".into()));
    }
    if table.column_count() == 0 {
        return Err(FormulaError::InvalidInput("table has no columns".into()));
    }
    if table.is_empty() {
        return Err(FormulaError::InvalidInput("table has no rows".into()));
    }

    let parsed = match parse_formula(formula) {
        Ok(expr) => Some(expr),
        Err(e) => {
            log::warn!("formula {:?} failed to parse: {}", formula, e);
            None
        }
    };

    let existing = table.schema().index_of(target_column);
    let schema = match existing {
        Some(_) => table.schema().clone(),
        None => table.schema().with_column(target_column)?,
    };

    let mut out = Table::new(schema);
    for (row_idx, row) in table.rows().iter().enumerate() {
        let result = match &parsed {
            Some(expr) => {
                let ctx = EvaluationContext::new(table, row_idx);
                match evaluate(expr, &ctx) {
                    Ok(value) => CellValue::from(value),
                    Err(e) => {
                        log::warn!("row {}: formula evaluation failed: {}", row_idx, e);
                        CellValue::Error(CellError::Error)
                    }
                }
            }
            None => CellValue::Error(CellError::Error),
        };

        let mut new_row = row.clone();
        match existing {
            Some(col) => new_row[col] = result,
            None => new_row.push(result),
        }
        out.push_row(new_row)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetsense_core::Schema;

    fn sales_table() -> Table {
        let schema = Schema::new(vec!["product".into(), "amount".into()]).unwrap();
        Table::with_rows(
            schema,
            vec![
                vec![CellValue::text("widget"), CellValue::Number(50.0)],
                vec![CellValue::text("gadget"), CellValue::Number(150.0)],
                vec![CellValue::text("gizmo"), CellValue::Number(25.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_aggregate_fills_every_row() {
        let table = sales_table();
        let result = apply_formula(&table, "=SUM(B:B)", "total").unwrap();
        assert_eq!(result.column_count(), 3);
        for row_idx in 0..result.row_count() {
            assert_eq!(
                result.value(row_idx, "total"),
                Some(&CellValue::Number(225.0))
            );
        }
    }

    #[test]
    fn test_per_row_condition() {
        let table = sales_table();
        let result =
            apply_formula(&table, "=IF(B1>100,\"High\",\"Low\")", "tier").unwrap();
        assert_eq!(result.value(0, "tier"), Some(&CellValue::text("Low")));
        // B1 is positional: every row sees the same cell
        assert_eq!(result.value(1, "tier"), Some(&CellValue::text("Low")));

        let result = apply_formula(&table, "=IF(amount>100,\"High\",\"Low\")", "tier").unwrap();
        assert_eq!(result.value(0, "tier"), Some(&CellValue::text("Low")));
        assert_eq!(result.value(1, "tier"), Some(&CellValue::text("High")));
        assert_eq!(result.value(2, "tier"), Some(&CellValue::text("Low")));
    }

    #[test]
    fn test_overwrites_existing_column() {
        let table = sales_table();
        let result = apply_formula(&table, "=amount*2", "amount").unwrap();
        assert_eq!(result.column_count(), 2);
        assert_eq!(result.value(0, "amount"), Some(&CellValue::Number(100.0)));
    }

    #[test]
    fn test_parse_failure_fills_sentinel() {
        let table = sales_table();
        let result = apply_formula(&table, "=SUM(B:B", "total").unwrap();
        for row_idx in 0..result.row_count() {
            assert_eq!(
                result.value(row_idx, "total"),
                Some(&CellValue::Error(CellError::Error))
            );
        }
    }

    #[test]
    fn test_row_failure_does_not_abort() {
        let schema = Schema::new(vec!["v".into()]).unwrap();
        let table = Table::with_rows(
            schema,
            vec![
                vec![CellValue::Number(3.0)],
                vec![CellValue::text("oops")],
                vec![CellValue::Number(5.0)],
            ],
        )
        .unwrap();

        let result = apply_formula(&table, "=v*2", "doubled").unwrap();
        assert_eq!(result.value(0, "doubled"), Some(&CellValue::Number(6.0)));
        assert_eq!(
            result.value(1, "doubled"),
            Some(&CellValue::Error(CellError::Error))
        );
        assert_eq!(result.value(2, "doubled"), Some(&CellValue::Number(10.0)));
    }

    #[test]
    fn test_structural_errors_abort() {
        let table = sales_table();
        assert!(matches!(
            apply_formula(&table, "   ", "x"),
            Err(FormulaError::InvalidInput(_))
        ));

        let empty = Table::new(Schema::new(vec!["a".into()]).unwrap());
        assert!(matches!(
            apply_formula(&empty, "=1+1", "x"),
            Err(FormulaError::InvalidInput(_))
        ));
    }
}
