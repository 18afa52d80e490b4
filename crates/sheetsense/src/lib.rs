//! # sheetsense
//!
//! Prompt-driven table analysis with a small spreadsheet-formula
//! interpreter. Paste or load tabular data, describe what you want in
//! plain language, and get back a transformed table plus a summary, or
//! apply a constrained spreadsheet formula per row.
//!
//! ## Example
//!
//! ```rust
//! use sheetsense::{analyze, apply_formula, CsvReadOptions, CsvReader};
//!
//! let csv = "region,amount\nnorth,10\nsouth,30\nnorth,20\n";
//! let table = CsvReader::read_str(csv, &CsvReadOptions::default()).unwrap();
//!
//! let result = analyze(&table, "summarize by region").unwrap();
//! assert_eq!(result.data.row_count(), 2);
//!
//! let with_total = apply_formula(&table, "=SUM(B:B)", "total").unwrap();
//! assert_eq!(with_total.column_count(), 3);
//! ```

pub mod records;
pub mod service;

pub use records::{records_from_table, table_from_records};
pub use service::{
    analyze_request, generate_formula_request, AnalyzeRequest, AnalyzeResponse,
    GenerateFormulaRequest, GenerateFormulaResponse, ServiceError,
};

// Core types
pub use sheetsense_core::{
    classify_columns, numeric_columns, CellError, CellValue, ColumnRole, Row, Schema, Table,
    TableError, NUMERIC_ROLE_THRESHOLD, ROLE_SAMPLE_ROWS,
};

// Formula dialect
pub use sheetsense_formula::{
    apply_formula, column_index, column_letter, evaluate, parse_formula, EvaluationContext,
    FormulaError, FormulaResult, FormulaValue,
};

// Analysis engine
pub use sheetsense_engine::{
    analyze, classify_intent, generate_insights, suggest_formula, EngineError, FormulaSuggestion,
    InsightProvider, Intent, NoRemote, OperationResult, RemoteConfig,
};

// CSV I/O
pub use sheetsense_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
