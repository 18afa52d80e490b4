//! # sheetsense-formula
//!
//! Parser and evaluator for the constrained spreadsheet-formula dialect.
//!
//! The dialect supports a fixed function set (SUM, AVERAGE, COUNT, IF, AND,
//! OR, NOT, CONCATENATE, VLOOKUP, ABS, ROUND, STDEV, COUNTIF), positional
//! cell references (`A1`, `AA12`), column ranges (`A:B`), bare column names
//! bound from the current row, arithmetic/comparison operators, and `&`
//! concatenation. There is no dependency graph and no recalculation: a
//! formula is parsed once and evaluated independently against every row.
//!
//! ## Example
//!
//! ```rust
//! use sheetsense_core::{CellValue, Schema, Table};
//! use sheetsense_formula::apply_formula;
//!
//! let schema = Schema::new(vec!["A".into()]).unwrap();
//! let table = Table::with_rows(schema, vec![
//!     vec![CellValue::Number(1.0)],
//!     vec![CellValue::Number(2.0)],
//!     vec![CellValue::Number(3.0)],
//! ]).unwrap();
//!
//! let result = apply_formula(&table, "=SUM(A:A)", "total").unwrap();
//! assert_eq!(result.value(0, "total"), Some(&CellValue::Number(6.0)));
//! ```

pub mod apply;
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use apply::apply_formula;
pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, EvaluationContext, FormulaValue};
pub use parser::{column_index, column_letter, parse_formula};
