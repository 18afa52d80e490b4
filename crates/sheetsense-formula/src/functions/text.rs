//! Text functions

use super::flatten;
use crate::error::FormulaResult;
use crate::evaluator::{EvaluationContext, FormulaValue};

/// CONCATENATE(value1, [value2], ...) - Joins the text forms of its arguments
pub fn fn_concatenate(
    args: &[FormulaValue],
    _ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let mut out = String::new();
    for value in flatten(args) {
        out.push_str(&value.as_text());
    }
    Ok(FormulaValue::Text(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsense_core::{Schema, Table};

    #[test]
    fn test_concatenate() {
        let table = Table::new(Schema::new(vec![]).unwrap());
        let ctx = EvaluationContext::new(&table, 0);
        let args = vec![
            FormulaValue::Text("id-".into()),
            FormulaValue::Number(7.0),
            FormulaValue::Boolean(true),
        ];
        assert_eq!(
            fn_concatenate(&args, &ctx).unwrap(),
            FormulaValue::Text("id-7TRUE".into())
        );
    }
}
