//! Table storage: ordered fixed-width rows sharing a schema

use crate::error::{Result, TableError};
use crate::schema::Schema;
use crate::value::CellValue;

/// One record of a table: a fixed-width value vector indexed by column position
pub type Row = Vec<CellValue>;

/// An ordered sequence of rows sharing a schema.
///
/// Row order is significant (positional cell references depend on it) and is
/// preserved unless an operation explicitly sorts or filters. Operations
/// never mutate a table in place; they build new tables, which makes
/// concurrent reads of a shared table safe by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Create a table from a schema and pre-built rows
    ///
    /// Every row must match the schema width.
    pub fn with_rows(schema: Schema, rows: Vec<Row>) -> Result<Self> {
        for row in &rows {
            if row.len() != schema.len() {
                return Err(TableError::WidthMismatch {
                    expected: schema.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self { schema, rows })
    }

    /// The table's schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.schema.len() {
            return Err(TableError::WidthMismatch {
                expected: self.schema.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// All rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// A single row by position
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Value at (row, column) position
    pub fn value_at(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Value in `row` for the named column
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.schema.index_of(column)?;
        self.value_at(row, col)
    }

    /// Iterate over the values of one column, top to bottom
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().filter_map(move |r| r.get(col))
    }

    /// Build a new table keeping only the rows at the given positions
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Build a new table from the first `n` rows
    pub fn head(&self, n: usize) -> Table {
        Self {
            schema: self.schema.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let schema = Schema::new(vec!["name".into(), "score".into()]).unwrap();
        Table::with_rows(
            schema,
            vec![
                vec![CellValue::text("alice"), CellValue::Number(10.0)],
                vec![CellValue::text("bob"), CellValue::Number(7.0)],
                vec![CellValue::text("carol"), CellValue::Number(12.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut table = sample();
        let err = table.push_row(vec![CellValue::text("short")]).unwrap_err();
        assert!(matches!(
            err,
            TableError::WidthMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_value_lookup() {
        let table = sample();
        assert_eq!(table.value(1, "name"), Some(&CellValue::text("bob")));
        assert_eq!(table.value(1, "missing"), None);
        assert_eq!(table.value_at(99, 0), None);
    }

    #[test]
    fn test_select_and_head_preserve_order() {
        let table = sample();
        let picked = table.select_rows(&[2, 0]);
        assert_eq!(picked.value(0, "name"), Some(&CellValue::text("carol")));
        assert_eq!(picked.value(1, "name"), Some(&CellValue::text("alice")));

        let head = table.head(2);
        assert_eq!(head.row_count(), 2);
        assert_eq!(head.value(0, "name"), Some(&CellValue::text("alice")));
    }
}
