//! Math and aggregate functions

use super::{flatten, numeric_values};
use crate::error::FormulaResult;
use crate::evaluator::{EvaluationContext, FormulaValue};

/// SUM(value1, [value2], ...) - Adds its arguments
///
/// Ranges are flattened; values that do not read as numbers contribute 0.
pub fn fn_sum(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let total: f64 = flatten(args)
        .iter()
        .map(|v| v.as_number().unwrap_or(0.0))
        .sum();
    Ok(FormulaValue::Number(total))
}

/// AVERAGE(value1, [value2], ...) - Mean of the numeric values
///
/// Non-numeric values are excluded from both the sum and the count; an
/// all-non-numeric argument list averages to 0 rather than erroring.
pub fn fn_average(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let values = numeric_values(args);
    if values.is_empty() {
        return Ok(FormulaValue::Number(0.0));
    }
    let total: f64 = values.iter().sum();
    Ok(FormulaValue::Number(total / values.len() as f64))
}

/// COUNT(value1, [value2], ...) - Number of values, ranges flattened
///
/// Counts every value (including text), not just numbers.
pub fn fn_count(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(FormulaValue::Number(flatten(args).len() as f64))
}

/// ABS(number) - Absolute value
pub fn fn_abs(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let n = args[0].to_number()?;
    Ok(FormulaValue::Number(n.abs()))
}

/// ROUND(number, [digits]) - Round to `digits` decimal places (default 0)
pub fn fn_round(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let n = args[0].to_number()?;
    let digits = match args.get(1) {
        Some(v) => v.to_number()?.trunc() as i32,
        None => 0,
    };
    let factor = 10f64.powi(digits);
    Ok(FormulaValue::Number((n * factor).round() / factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsense_core::{Schema, Table};

    fn ctx_table() -> Table {
        Table::new(Schema::new(vec![]).unwrap())
    }

    fn num(n: f64) -> FormulaValue {
        FormulaValue::Number(n)
    }

    #[test]
    fn test_sum_coerces_non_numeric_to_zero() {
        let table = ctx_table();
        let ctx = EvaluationContext::new(&table, 0);
        let args = vec![num(1.0), FormulaValue::Text("abc".into()), num(2.0)];
        assert_eq!(fn_sum(&args, &ctx).unwrap(), num(3.0));
    }

    #[test]
    fn test_sum_flattens_ranges() {
        let table = ctx_table();
        let ctx = EvaluationContext::new(&table, 0);
        let arr = FormulaValue::Array(vec![vec![num(1.0)], vec![num(2.0)], vec![num(3.0)]]);
        assert_eq!(fn_sum(&[arr], &ctx).unwrap(), num(6.0));
    }

    #[test]
    fn test_average_skips_non_numeric() {
        let table = ctx_table();
        let ctx = EvaluationContext::new(&table, 0);
        let args = vec![num(2.0), FormulaValue::Text("x".into()), num(4.0)];
        assert_eq!(fn_average(&args, &ctx).unwrap(), num(3.0));

        let none = vec![FormulaValue::Text("x".into())];
        assert_eq!(fn_average(&none, &ctx).unwrap(), num(0.0));
    }

    #[test]
    fn test_count_counts_everything() {
        let table = ctx_table();
        let ctx = EvaluationContext::new(&table, 0);
        let args = vec![num(1.0), FormulaValue::Text("x".into())];
        assert_eq!(fn_count(&args, &ctx).unwrap(), num(2.0));
    }

    #[test]
    fn test_round() {
        let table = ctx_table();
        let ctx = EvaluationContext::new(&table, 0);
        assert_eq!(fn_round(&[num(2.4)], &ctx).unwrap(), num(2.0));
        assert_eq!(fn_round(&[num(2.5)], &ctx).unwrap(), num(3.0));
        assert_eq!(
            fn_round(&[num(3.14159), num(2.0)], &ctx).unwrap(),
            num(3.14)
        );
    }

    #[test]
    fn test_abs() {
        let table = ctx_table();
        let ctx = EvaluationContext::new(&table, 0);
        assert_eq!(fn_abs(&[num(-3.0)], &ctx).unwrap(), num(3.0));
    }
}
