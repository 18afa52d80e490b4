//! CSV ingest/export round-trip tests

use sheetsense::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

#[test]
fn test_round_trip_preserves_header_order_and_values() {
    let csv = "name,amount,notes\nwidget,50,fine\ngadget,150,\"has, comma\"\n";
    let table = CsvReader::read_str(csv, &CsvReadOptions::default()).unwrap();
    let out = CsvWriter::write_str(&table, &CsvWriteOptions::default()).unwrap();
    assert_eq!(out, csv);
}

#[test]
fn test_blank_lines_dropped_on_ingest() {
    let csv = "a,b\n1,2\n\n3,4\n";
    let table = CsvReader::read_str(csv, &CsvReadOptions::default()).unwrap();
    assert_eq!(table.row_count(), 2);

    let out = CsvWriter::write_str(&table, &CsvWriteOptions::default()).unwrap();
    assert_eq!(out, "a,b\n1,2\n3,4\n");
}

#[test]
fn test_analysis_results_export() {
    let csv = "region,amount\nnorth,10\nnorth,30\nsouth,20\n";
    let table = CsvReader::read_str(csv, &CsvReadOptions::default()).unwrap();

    let result = sheetsense::analyze(&table, "summarize by region").unwrap();
    let out = CsvWriter::write_str(&result.data, &CsvWriteOptions::default()).unwrap();

    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some("region,count,percentage,avg_amount,sum_amount,max_amount,min_amount")
    );
    assert_eq!(lines.next(), Some("north,2,66.7%,20.00,40.00,30,10"));
    assert_eq!(lines.next(), Some("south,1,33.3%,20.00,20.00,20,20"));
}
