//! Tests for header resolution and row reading through the CSV reader

use super::*;
use crate::Error;
use crate::app::services::csv_reader::{ColumnSchema, CsvReader};
use std::io::Cursor;

fn reader_for(content: &str, prefixes: &[&str]) -> crate::Result<CsvReader<Cursor<Vec<u8>>>> {
    CsvReader::from_reader(
        Cursor::new(content.as_bytes().to_vec()),
        ColumnSchema::new(prefixes.iter().copied()),
        4096,
    )
}

#[test]
fn test_reads_rows_in_schema_order() {
    let content = "\"A\",\"B\",\"C\"\n1,2,3\n4,5,6\n";
    let mut reader = reader_for(content, &["\"C\"", "\"A\""]).unwrap();

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row_text(&row), vec!["3", "1"]);
    assert_eq!(row.filled, 2);
    assert_eq!(row.line_number, 2);

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row_text(&row), vec!["6", "4"]);

    assert!(reader.read_row().unwrap().is_none());
    assert_eq!(reader.stats().rows_read, 2);
}

#[test]
fn test_values_are_trimmed() {
    let content = "\"A\", \"B\"\n  1 ,\t2 \r\n";
    let mut reader = reader_for(content, &["\"A\"", "\"B\""]).unwrap();

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row_text(&row), vec!["1", "2"]);
    assert!(row.is_complete());
}

#[test]
fn test_short_row_is_incomplete() {
    let content = "\"A\",\"B\",\"C\"\n1,2\n";
    let mut reader = reader_for(content, &["\"A\"", "\"C\""]).unwrap();

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row.values.len(), 2);
    assert_eq!(row.filled, 1);
    assert!(!row.is_complete());
}

#[test]
fn test_empty_values_do_not_count_as_filled() {
    let content = "\"A\",\"B\"\n1,   \n";
    let mut reader = reader_for(content, &["\"A\"", "\"B\""]).unwrap();

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row.filled, 1);
    assert!(row.values[1].is_empty());
}

#[test]
fn test_embedded_comma_always_splits() {
    let content = "\"A\",\"B\"\n\"x,y\",2\n";
    let mut reader = reader_for(content, &["\"A\"", "\"B\""]).unwrap();

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row_text(&row), vec!["\"x", "y\""]);
}

#[test]
fn test_extra_trailing_columns_are_ignored() {
    let content = "\"A\",\"B\",\"C\"\n1,2,3,4,5,6\n";
    let mut reader = reader_for(content, &["\"B\""]).unwrap();

    let row = reader.read_row().unwrap().unwrap();
    assert_eq!(row_text(&row), vec!["2"]);
    assert!(row.is_complete());
}

#[test]
fn test_next_complete_row_skips_and_counts() {
    let content = "\"A\",\"B\"\n1,2\n3\n\n,4\n5,6\n";
    let mut reader = reader_for(content, &["\"A\"", "\"B\""]).unwrap();

    let first = reader.next_complete_row().unwrap().unwrap();
    assert_eq!(row_text(&first), vec!["1", "2"]);

    let second = reader.next_complete_row().unwrap().unwrap();
    assert_eq!(row_text(&second), vec!["5", "6"]);
    assert_eq!(second.line_number, 6);

    assert!(reader.next_complete_row().unwrap().is_none());

    let stats = reader.stats();
    assert_eq!(stats.rows_read, 5);
    assert_eq!(stats.rows_emitted, 2);
    assert_eq!(stats.rows_skipped, 3);
}

#[test]
fn test_missing_header_fails_open() {
    let result = reader_for("\"A\",\"B\"\n1,2\n", &["\"A\"", "\"Z\""]);

    match result {
        Err(Error::SchemaResolution { missing }) => assert_eq!(missing, vec!["\"Z\""]),
        other => panic!("expected resolution failure, got {:?}", other),
    }
}

#[test]
fn test_empty_input_reports_all_missing() {
    let result = reader_for("", &["\"A\"", "\"B\""]);
    assert_eq!(
        result.unwrap_err().missing_columns(),
        ["\"A\"".to_string(), "\"B\"".to_string()]
    );
}

#[test]
fn test_header_overflow_is_fatal() {
    let long_header = format!("\"A\",{}\n1\n", "x".repeat(100));
    let result = CsvReader::from_reader(
        Cursor::new(long_header.into_bytes()),
        ColumnSchema::new(["\"A\""]),
        64,
    );

    assert!(matches!(result, Err(Error::LineOverflow { line: 1, capacity: 64 })));
}

#[test]
fn test_data_overflow_is_fatal() {
    let content = format!("\"A\"\n1\n{}\n3\n", "9".repeat(80));
    let mut reader = CsvReader::from_reader(
        Cursor::new(content.into_bytes()),
        ColumnSchema::new(["\"A\""]),
        64,
    )
    .unwrap();

    assert_eq!(row_text(&reader.read_row().unwrap().unwrap()), vec!["1"]);
    assert!(matches!(
        reader.read_row(),
        Err(Error::LineOverflow { line: 3, .. })
    ));
}

#[test]
fn test_schema_can_be_reset_and_reused() {
    let reader = reader_for("\"A\",\"B\"\n", &["\"B\""]).unwrap();
    let mut schema = reader.into_schema();
    assert_eq!(schema.columns()[0].resolved_index(), Some(1));

    schema.reset();
    let reader = CsvReader::from_reader(Cursor::new(b"\"B\"\n".to_vec()), schema, 4096).unwrap();
    assert_eq!(reader.schema().columns()[0].resolved_index(), Some(0));
}

#[test]
fn test_open_file_and_scattered_columns() {
    let content = format!(
        "{}\n1000,1700000000000,12.7,-37.81,144.96,88.0,1.52,0.51,1\n",
        SCATTERED_HEADER
    );
    let file = create_temp_file(&content);

    let mut reader =
        CsvReader::open(file.path(), ColumnSchema::new(extract_prefixes()), 4096).unwrap();
    let row = reader.next_complete_row().unwrap().unwrap();

    assert_eq!(
        row_text(&row),
        vec!["1000", "1700000000000", "-37.81", "144.96", "1.52", "0.51", "1"]
    );
}

#[test]
fn test_open_missing_file_is_io_error() {
    let result = CsvReader::open(
        std::path::Path::new("/nonexistent/log.csv"),
        ColumnSchema::new(extract_prefixes()),
        4096,
    );

    match result {
        Err(Error::Io { message, .. }) => assert!(message.contains("Unable to open")),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_extract_log_round_trip_values() {
    let file = create_temp_file(&create_extract_log());
    let mut reader =
        CsvReader::open(file.path(), ColumnSchema::new(extract_prefixes()), 4096).unwrap();

    assert_eq!(
        reader.schema().header_line(),
        b"\"Interval\",\"Utc\",\"Latitude\",\"Longitude\",\"PredTime\",\"ElapsedTime\",\"CurrentLap\""
    );
    let row = reader.next_complete_row().unwrap().unwrap();
    assert_eq!(row.to_csv_line(), b"1,100,12.34,56.78,0.0,10.5,1");
}

#[test]
fn test_non_utf8_header_and_values_are_kept() {
    let content = b"\"Latitude\"|\"\xB0\",\"Utc\"\n12.5\xB0,100\n".to_vec();
    let mut reader = CsvReader::from_reader(
        Cursor::new(content),
        ColumnSchema::new(["\"Latitude\"", "\"Utc\""]),
        4096,
    )
    .unwrap();

    assert_eq!(reader.schema().header_line(), b"\"Latitude\"|\"\xB0\",\"Utc\"");
    let row = reader.next_complete_row().unwrap().unwrap();
    assert_eq!(row.to_csv_line(), b"12.5\xB0,100");
}
