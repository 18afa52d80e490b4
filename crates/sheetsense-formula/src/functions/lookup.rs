//! Lookup functions

use crate::error::FormulaResult;
use crate::evaluator::{EvaluationContext, FormulaValue};
use sheetsense_core::CellError;

fn values_equal(a: &FormulaValue, b: &FormulaValue) -> bool {
    match (a, b) {
        (FormulaValue::Number(x), FormulaValue::Number(y)) => x == y,
        (FormulaValue::Boolean(x), FormulaValue::Boolean(y)) => x == y,
        (FormulaValue::Text(x), FormulaValue::Text(y)) => x == y,
        (FormulaValue::Empty, FormulaValue::Empty) => true,
        _ => false,
    }
}

/// VLOOKUP(lookup_value, table_array, col_index, [exact_match])
///
/// Scans `table_array` rows top to bottom. Exact mode requires equality on
/// the first element of a row; approximate mode (the default) requires
/// case-insensitive substring containment of the lookup value's text in the
/// first element's text. Returns the `col_index`-th (1-based) element of the
/// first matching row, or #N/A when nothing matches.
pub fn fn_vlookup(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let lookup = &args[0];
    if let FormulaValue::Error(e) = lookup {
        return Ok(FormulaValue::Error(*e));
    }

    let table_array = match &args[1] {
        FormulaValue::Array(rows) => rows,
        FormulaValue::Error(e) => return Ok(FormulaValue::Error(*e)),
        _ => return Ok(FormulaValue::Error(CellError::Value)),
    };

    let col_index = match args[2].as_number() {
        Some(n) if n >= 1.0 => n.trunc() as usize,
        _ => return Ok(FormulaValue::Error(CellError::Value)),
    };

    let exact = match args.get(3) {
        Some(v) => v.as_bool().unwrap_or(false),
        None => false,
    };

    let needle = lookup.as_text().to_lowercase();

    for row in table_array {
        let first = row.first().unwrap_or(&FormulaValue::Empty);
        let matched = if exact {
            values_equal(first, lookup)
        } else {
            first.as_text().to_lowercase().contains(&needle)
        };
        if matched {
            return Ok(row
                .get(col_index - 1)
                .cloned()
                .unwrap_or(FormulaValue::Error(CellError::Na)));
        }
    }

    Ok(FormulaValue::Error(CellError::Na))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsense_core::{Schema, Table};

    fn array(rows: Vec<Vec<FormulaValue>>) -> FormulaValue {
        FormulaValue::Array(rows)
    }

    fn text(s: &str) -> FormulaValue {
        FormulaValue::Text(s.into())
    }

    fn with_ctx<F: FnOnce(&EvaluationContext)>(f: F) {
        let table = Table::new(Schema::new(vec![]).unwrap());
        let ctx = EvaluationContext::new(&table, 0);
        f(&ctx);
    }

    fn fruit_table() -> FormulaValue {
        array(vec![
            vec![text("Red Apple"), FormulaValue::Number(3.0)],
            vec![text("Banana"), FormulaValue::Number(1.0)],
        ])
    }

    #[test]
    fn test_vlookup_approximate_substring() {
        with_ctx(|ctx| {
            let args = vec![text("apple"), fruit_table(), FormulaValue::Number(2.0)];
            assert_eq!(
                fn_vlookup(&args, ctx).unwrap(),
                FormulaValue::Number(3.0)
            );
        });
    }

    #[test]
    fn test_vlookup_exact() {
        with_ctx(|ctx| {
            let args = vec![
                text("Banana"),
                fruit_table(),
                FormulaValue::Number(2.0),
                FormulaValue::Boolean(true),
            ];
            assert_eq!(
                fn_vlookup(&args, ctx).unwrap(),
                FormulaValue::Number(1.0)
            );

            // Exact mode does not fall back to substring matching
            let args = vec![
                text("apple"),
                fruit_table(),
                FormulaValue::Number(2.0),
                FormulaValue::Boolean(true),
            ];
            assert_eq!(
                fn_vlookup(&args, ctx).unwrap(),
                FormulaValue::Error(CellError::Na)
            );
        });
    }

    #[test]
    fn test_vlookup_no_match_is_na() {
        with_ctx(|ctx| {
            let args = vec![text("pear"), fruit_table(), FormulaValue::Number(1.0)];
            assert_eq!(
                fn_vlookup(&args, ctx).unwrap(),
                FormulaValue::Error(CellError::Na)
            );
        });
    }

    #[test]
    fn test_vlookup_bad_table_is_value_error() {
        with_ctx(|ctx| {
            let args = vec![text("x"), FormulaValue::Number(1.0), FormulaValue::Number(1.0)];
            assert_eq!(
                fn_vlookup(&args, ctx).unwrap(),
                FormulaValue::Error(CellError::Value)
            );
        });
    }
}
