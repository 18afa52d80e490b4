//! JSON row records and tables
//!
//! Service boundaries exchange tables as arrays of JSON objects, one per
//! row. The first record's keys define the schema, in object order, which
//! is why the JSON layer preserves key order.

use serde_json::{Map, Number, Value};
use sheetsense_core::{CellValue, Row, Schema, Table, TableError};

/// Build a table from JSON row records.
///
/// The first record's keys become the schema; later records are read
/// through that schema, with absent keys as missing values.
pub fn table_from_records(records: &[Map<String, Value>]) -> Result<Table, TableError> {
    let Some(first) = records.first() else {
        return Ok(Table::new(Schema::new(vec![])?));
    };

    let names: Vec<String> = first.keys().cloned().collect();
    let schema = Schema::new(names)?;

    let mut table = Table::new(schema);
    for record in records {
        let row: Row = table
            .schema()
            .names()
            .iter()
            .map(|name| record.get(name).map(cell_from_json).unwrap_or(CellValue::Empty))
            .collect();
        table.push_row(row)?;
    }

    Ok(table)
}

/// Serialize a table as JSON row records, schema order preserved
pub fn records_from_table(table: &Table) -> Vec<Map<String, Value>> {
    table
        .rows()
        .iter()
        .map(|row| {
            table
                .schema()
                .names()
                .iter()
                .zip(row)
                .map(|(name, value)| (name.clone(), json_from_cell(value)))
                .collect()
        })
        .collect()
}

pub(crate) fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Boolean(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::text(n.to_string()),
        },
        Value::String(s) => CellValue::text(s.clone()),
        // Nested structures are kept as their JSON text
        other => CellValue::text(other.to_string()),
    }
}

fn json_from_cell(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::Null,
        CellValue::Boolean(b) => Value::Bool(*b),
        CellValue::Number(n) => match Number::from_f64(*n) {
            Some(num) => Value::Number(num),
            None => Value::Null,
        },
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Error(e) => Value::String(e.as_str().to_string()),
    }
}
