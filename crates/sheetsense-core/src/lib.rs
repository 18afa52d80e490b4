//! # sheetsense-core
//!
//! Core data structures for the sheetsense data-operation engine.
//!
//! This crate provides the fundamental types used throughout sheetsense:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans, errors)
//! - [`Schema`] - Ordered column descriptors with a name lookup built once
//! - [`Table`] - An ordered sequence of fixed-width rows sharing a schema
//! - [`ColumnRole`] - Derived numeric/categorical classification of a column
//!
//! ## Example
//!
//! ```rust
//! use sheetsense_core::{CellValue, Schema, Table};
//!
//! let schema = Schema::new(vec!["region".into(), "sales".into()]).unwrap();
//! let mut table = Table::new(schema);
//!
//! table.push_row(vec![CellValue::text("North"), CellValue::Number(120.0)]).unwrap();
//! table.push_row(vec![CellValue::text("South"), CellValue::Number(80.0)]).unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! ```

pub mod error;
pub mod roles;
pub mod schema;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use error::{Result, TableError};
pub use roles::{classify_columns, numeric_columns, ColumnRole};
pub use schema::Schema;
pub use table::{Row, Table};
pub use value::{CellError, CellValue};

/// Number of leading rows sampled when classifying a column's role
pub const ROLE_SAMPLE_ROWS: usize = 10;

/// Fraction of sampled values that must be numeric for a column to be
/// classified numeric
pub const NUMERIC_ROLE_THRESHOLD: f64 = 0.7;
