//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use sheetsense_core::{CellValue, Row, Schema, Table};

/// CSV reader producing tables
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV text into a table
    pub fn read_str(data: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        Self::read(data.as_bytes(), options)
    }

    /// Read CSV from a reader into a table
    ///
    /// The first record is the header and defines the schema. Short records
    /// are padded with missing values and long records truncated, so every
    /// row matches the header width.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let trim = if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .trim(trim)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if headers.is_empty() {
            return Err(CsvError::MissingHeader);
        }
        let names: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let schema = Schema::new(names)?;
        let width = schema.len();

        let mut table = Table::new(schema);
        for result in csv_reader.records() {
            let record = result?;

            // A record of empty fields is a blank line; skip it
            if record.iter().all(|f| f.is_empty()) {
                continue;
            }

            let mut row: Row = Vec::with_capacity(width);
            for idx in 0..width {
                let field = record.get(idx).unwrap_or("");
                let value = if options.detect_types {
                    Self::detect_type(field)
                } else if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(field)
                };
                row.push(value);
            }

            table.push_row(row)?;
        }

        Ok(table)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        match field {
            "true" | "TRUE" | "True" => return CellValue::Boolean(true),
            "false" | "FALSE" | "False" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = field.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::text(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_basic() {
        let data = "name,amount\nwidget,50\ngadget,150\n";
        let table = CsvReader::read_str(data, &CsvReadOptions::default()).unwrap();

        assert_eq!(table.schema().names(), &["name".to_string(), "amount".to_string()]);
        assert_eq!(table.row_count(), 2);
        // Fields stay text without detect_types
        assert_eq!(table.value(0, "amount"), Some(&CellValue::text("50")));
    }

    #[test]
    fn test_read_detect_types() {
        let data = "name,amount,active\nwidget,50,true\n";
        let options = CsvReadOptions {
            detect_types: true,
            ..Default::default()
        };
        let table = CsvReader::read_str(data, &options).unwrap();

        assert_eq!(table.value(0, "amount"), Some(&CellValue::Number(50.0)));
        assert_eq!(table.value(0, "active"), Some(&CellValue::Boolean(true)));
    }

    #[test]
    fn test_ragged_rows_normalized() {
        let data = "a,b,c\n1,2\n1,2,3,4\n";
        let table = CsvReader::read_str(data, &CsvReadOptions::default()).unwrap();

        assert_eq!(table.value(0, "c"), Some(&CellValue::Empty));
        assert_eq!(table.row(1).map(|r| r.len()), Some(3));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let data = "a,b\n1,2\n,\n3,4\n";
        let table = CsvReader::read_str(data, &CsvReadOptions::default()).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_quoted_fields() {
        let data = "name,note\n\"Smith, Jane\",\"said \"\"hi\"\"\"\n";
        let table = CsvReader::read_str(data, &CsvReadOptions::default()).unwrap();
        assert_eq!(table.value(0, "name"), Some(&CellValue::text("Smith, Jane")));
        assert_eq!(table.value(0, "note"), Some(&CellValue::text("said \"hi\"")));
    }

    #[test]
    fn test_duplicate_headers_rejected() {
        let data = "a,a\n1,2\n";
        assert!(matches!(
            CsvReader::read_str(data, &CsvReadOptions::default()),
            Err(CsvError::Table(_))
        ));
    }
}
