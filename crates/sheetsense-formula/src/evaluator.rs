//! Formula evaluator
//!
//! Evaluates formula ASTs against a table and a current row. The context is
//! cheap to construct and is rebuilt per row; evaluation never mutates the
//! table.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::FunctionRegistry;
use sheetsense_core::{CellError, CellValue, Table};
use std::sync::OnceLock;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

fn get_function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Value types during formula evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(CellError),
    /// Range contents, row-shaped
    Array(Vec<Vec<FormulaValue>>),
    Empty,
}

impl FormulaValue {
    /// Convert to number, if possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            FormulaValue::Boolean(true) => Some(1.0),
            FormulaValue::Boolean(false) => Some(0.0),
            FormulaValue::Text(s) => s.trim().parse().ok(),
            FormulaValue::Empty => Some(0.0),
            _ => None,
        }
    }

    /// Force conversion to number for arithmetic
    pub fn to_number(&self) -> FormulaResult<f64> {
        self.as_number()
            .ok_or_else(|| FormulaError::Evaluation(format!("Cannot convert {:?} to number", self)))
    }

    /// Convert to boolean (truthiness for IF/AND/OR conditions)
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormulaValue::Boolean(b) => Some(*b),
            FormulaValue::Number(n) => Some(*n != 0.0),
            FormulaValue::Text(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") || s.is_empty() {
                    Some(false)
                } else {
                    None
                }
            }
            FormulaValue::Empty => Some(false),
            _ => None,
        }
    }

    /// Convert to display text
    pub fn as_text(&self) -> String {
        match self {
            FormulaValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FormulaValue::Text(s) => s.clone(),
            FormulaValue::Boolean(true) => "TRUE".to_string(),
            FormulaValue::Boolean(false) => "FALSE".to_string(),
            FormulaValue::Error(e) => e.to_string(),
            FormulaValue::Empty => String::new(),
            FormulaValue::Array(_) => CellError::Value.to_string(),
        }
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, FormulaValue::Error(_))
    }

    /// Get the error if this is one
    pub fn get_error(&self) -> Option<CellError> {
        match self {
            FormulaValue::Error(e) => Some(*e),
            _ => None,
        }
    }
}

impl From<&CellValue> for FormulaValue {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => FormulaValue::Empty,
            CellValue::Number(n) => FormulaValue::Number(*n),
            CellValue::Text(s) => FormulaValue::Text(s.clone()),
            CellValue::Boolean(b) => FormulaValue::Boolean(*b),
            CellValue::Error(e) => FormulaValue::Error(*e),
        }
    }
}

impl From<FormulaValue> for CellValue {
    fn from(value: FormulaValue) -> Self {
        match value {
            FormulaValue::Empty => CellValue::Empty,
            FormulaValue::Number(n) => CellValue::Number(n),
            FormulaValue::Text(s) => CellValue::Text(s),
            FormulaValue::Boolean(b) => CellValue::Boolean(b),
            FormulaValue::Error(e) => CellValue::Error(e),
            // A bare range cannot land in a single cell
            FormulaValue::Array(_) => CellValue::Error(CellError::Value),
        }
    }
}

/// Per-row context for formula evaluation
///
/// Exposes the full table for positional cell/range references and the
/// current row for bare column-name identifiers. Constructed fresh per row
/// and discarded after that row is evaluated.
pub struct EvaluationContext<'a> {
    table: &'a Table,
    current_row: usize,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context bound to `table` with `current_row` as the row
    /// being evaluated
    pub fn new(table: &'a Table, current_row: usize) -> Self {
        Self { table, current_row }
    }

    /// The table being evaluated against
    pub fn table(&self) -> &Table {
        self.table
    }

    /// Index of the row being evaluated
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Value at a positional reference (`row` is 1-based).
    ///
    /// An out-of-range row or column is a missing value, not an error.
    pub fn cell_value(&self, col: usize, row: usize) -> FormulaValue {
        match self.table.value_at(row - 1, col) {
            Some(v) => v.into(),
            None => FormulaValue::Empty,
        }
    }

    /// Contents of a column range across every row, row-shaped.
    ///
    /// Aggregate functions flatten the result in row-major order.
    pub fn column_range(&self, start: usize, end: usize) -> FormulaValue {
        let width = self.table.column_count();
        let mut rows = Vec::with_capacity(self.table.row_count());
        for row in self.table.rows() {
            let mut cols = Vec::new();
            for col in start..=end {
                if col < width {
                    if let Some(v) = row.get(col) {
                        cols.push(v.into());
                    }
                }
            }
            rows.push(cols);
        }
        FormulaValue::Array(rows)
    }

    /// Value of the named column in the current row
    pub fn field(&self, name: &str) -> Option<FormulaValue> {
        self.table
            .value(self.current_row, name)
            .map(FormulaValue::from)
    }
}

/// Evaluate a formula expression
pub fn evaluate(expr: &Expr, ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    match expr {
        // === Literals ===
        Expr::Number(n) => Ok(FormulaValue::Number(*n)),
        Expr::Text(s) => Ok(FormulaValue::Text(s.clone())),
        Expr::Boolean(b) => Ok(FormulaValue::Boolean(*b)),

        // === References ===
        Expr::CellRef { col, row } => Ok(ctx.cell_value(*col, *row)),

        Expr::ColumnRange { start, end } => Ok(ctx.column_range(*start, *end)),

        Expr::FieldRef(name) => ctx
            .field(name)
            .ok_or_else(|| FormulaError::UnknownName(name.clone())),

        // === Operators ===
        Expr::BinaryOp { op, left, right } => evaluate_binary_op(*op, left, right, ctx),

        Expr::UnaryOp { op, operand } => evaluate_unary_op(*op, operand, ctx),

        // === Functions ===
        Expr::Function { name, args } => evaluate_function(name, args, ctx),
    }
}

/// Evaluate a binary operation
fn evaluate_binary_op(
    op: BinaryOperator,
    left: &Expr,
    right: &Expr,
    ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let left_val = evaluate(left, ctx)?;
    let right_val = evaluate(right, ctx)?;

    // Propagate errors
    if let Some(e) = left_val.get_error() {
        return Ok(FormulaValue::Error(e));
    }
    if let Some(e) = right_val.get_error() {
        return Ok(FormulaValue::Error(e));
    }

    match op {
        BinaryOperator::Add => {
            Ok(FormulaValue::Number(left_val.to_number()? + right_val.to_number()?))
        }
        BinaryOperator::Subtract => {
            Ok(FormulaValue::Number(left_val.to_number()? - right_val.to_number()?))
        }
        BinaryOperator::Multiply => {
            Ok(FormulaValue::Number(left_val.to_number()? * right_val.to_number()?))
        }
        BinaryOperator::Divide => {
            let r = right_val.to_number()?;
            if r == 0.0 {
                Ok(FormulaValue::Error(CellError::Div0))
            } else {
                Ok(FormulaValue::Number(left_val.to_number()? / r))
            }
        }
        BinaryOperator::Power => {
            let result = left_val.to_number()?.powf(right_val.to_number()?);
            if result.is_nan() || result.is_infinite() {
                Ok(FormulaValue::Error(CellError::Num))
            } else {
                Ok(FormulaValue::Number(result))
            }
        }

        BinaryOperator::Equal => Ok(FormulaValue::Boolean(
            compare_values(&left_val, &right_val) == 0,
        )),
        BinaryOperator::NotEqual => Ok(FormulaValue::Boolean(
            compare_values(&left_val, &right_val) != 0,
        )),
        BinaryOperator::LessThan => Ok(FormulaValue::Boolean(
            compare_values(&left_val, &right_val) < 0,
        )),
        BinaryOperator::LessEqual => Ok(FormulaValue::Boolean(
            compare_values(&left_val, &right_val) <= 0,
        )),
        BinaryOperator::GreaterThan => Ok(FormulaValue::Boolean(
            compare_values(&left_val, &right_val) > 0,
        )),
        BinaryOperator::GreaterEqual => Ok(FormulaValue::Boolean(
            compare_values(&left_val, &right_val) >= 0,
        )),

        BinaryOperator::Concat => {
            Ok(FormulaValue::Text(left_val.as_text() + &right_val.as_text()))
        }
    }
}

/// Compare two values for ordering
///
/// Text that parses as a number compares numerically, so comparisons work
/// against tables ingested as text.
fn compare_values(left: &FormulaValue, right: &FormulaValue) -> i32 {
    if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
        return if l < r {
            -1
        } else if l > r {
            1
        } else {
            0
        };
    }

    match (left, right) {
        // Text compares case-insensitively
        (FormulaValue::Text(l), FormulaValue::Text(r)) => {
            l.to_lowercase().cmp(&r.to_lowercase()) as i32
        }

        // Mixed number/text: numbers sort before text
        (FormulaValue::Number(_), FormulaValue::Text(_)) => -1,
        (FormulaValue::Text(_), FormulaValue::Number(_)) => 1,

        _ => 0,
    }
}

/// Evaluate a unary operation
fn evaluate_unary_op(
    op: UnaryOperator,
    operand: &Expr,
    ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let val = evaluate(operand, ctx)?;

    if let Some(e) = val.get_error() {
        return Ok(FormulaValue::Error(e));
    }

    match op {
        UnaryOperator::Negate => Ok(FormulaValue::Number(-val.to_number()?)),
    }
}

/// Evaluate a function call
fn evaluate_function(
    name: &str,
    args: &[Expr],
    ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let registry = get_function_registry();

    let func = registry
        .get(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    if args.len() < func.min_args {
        return Err(FormulaError::ArgumentCount {
            function: name.to_string(),
            expected: format!("at least {}", func.min_args),
            actual: args.len(),
        });
    }

    if let Some(max) = func.max_args {
        if args.len() > max {
            return Err(FormulaError::ArgumentCount {
                function: name.to_string(),
                expected: format!("at most {}", max),
                actual: args.len(),
            });
        }
    }

    let mut evaluated_args = Vec::with_capacity(args.len());
    for arg in args {
        evaluated_args.push(evaluate(arg, ctx)?);
    }

    (func.implementation)(&evaluated_args, ctx)
}
