//! # sheetsense-csv
//!
//! CSV reader and writer for sheetsense tables. The first record is always
//! the header and becomes the table schema.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions};
pub use reader::CsvReader;
pub use writer::CsvWriter;
