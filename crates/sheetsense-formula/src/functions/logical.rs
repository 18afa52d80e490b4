//! Logical functions

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{EvaluationContext, FormulaValue};

fn truthy(value: &FormulaValue) -> FormulaResult<bool> {
    if let Some(e) = value.get_error() {
        // An error condition makes the whole expression fail for this row
        return Err(FormulaError::Evaluation(format!(
            "condition evaluated to {}",
            e
        )));
    }
    value.as_bool().ok_or_else(|| {
        FormulaError::Evaluation(format!("Cannot use {:?} as a condition", value))
    })
}

/// IF(condition, value_if_true, value_if_false)
pub fn fn_if(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    if truthy(&args[0])? {
        Ok(args[1].clone())
    } else {
        Ok(args[2].clone())
    }
}

/// AND(condition1, [condition2], ...) - TRUE when every condition holds
pub fn fn_and(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    for arg in args {
        if !truthy(arg)? {
            return Ok(FormulaValue::Boolean(false));
        }
    }
    Ok(FormulaValue::Boolean(true))
}

/// OR(condition1, [condition2], ...) - TRUE when any condition holds
pub fn fn_or(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    for arg in args {
        if truthy(arg)? {
            return Ok(FormulaValue::Boolean(true));
        }
    }
    Ok(FormulaValue::Boolean(false))
}

/// NOT(condition)
pub fn fn_not(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(FormulaValue::Boolean(!truthy(&args[0])?))
}
