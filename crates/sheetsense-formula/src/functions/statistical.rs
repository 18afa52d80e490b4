//! Statistical functions

use super::criteria::CriteriaMatcher;
use super::{flatten, numeric_values};
use crate::error::FormulaResult;
use crate::evaluator::{EvaluationContext, FormulaValue};

/// STDEV(value1, [value2], ...) - Sample standard deviation
///
/// Divides by n-1; returns 0 for one or zero numeric values.
pub fn fn_stdev(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let values = numeric_values(args);
    let n = values.len();
    if n <= 1 {
        return Ok(FormulaValue::Number(0.0));
    }

    let mean: f64 = values.iter().sum::<f64>() / n as f64;
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Ok(FormulaValue::Number(variance.sqrt()))
}

/// COUNTIF(range, criteria) - Count values matching a criteria
///
/// A `*` in a text criteria is a wildcard matching any run of characters;
/// any other criteria matches by exact equality.
pub fn fn_countif(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let range = flatten(&args[..1]);
    let matcher = CriteriaMatcher::new(&args[1]);

    let count = range.iter().filter(|v| matcher.matches(v)).count();
    Ok(FormulaValue::Number(count as f64))
}
