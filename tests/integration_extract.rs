//! Integration tests for column extraction from on-disk logs
//!
//! These tests drive the extract command's file entry point with logger-style
//! exports to verify header resolution, row projection and skip accounting
//! end to end.

use rcp_log_processor::cli::commands::extract::extract_file;
use rcp_log_processor::{Error, RcpLogConfig};
use std::io::Write;
use tempfile::NamedTempFile;

/// Header as exported by the logger, with unit and range decorations
const DECORATED_HEADER: &str = "\"Interval\"|\"ms\"|0|0|1,\"Utc\"|\"ms\"|0|0|1,\"AccelX\"|\"G\"|-3.0|3.0|25,\"Latitude\"|\"Degrees\"|-180.0|180.0|10,\"Longitude\"|\"Degrees\"|-180.0|180.0|10,\"Speed\"|\"mph\"|0.0|150.0|10,\"PredTime\"|\"Min\"|0.0|1000.0|5,\"ElapsedTime\"|\"Min\"|0.0|1000.0|10,\"CurrentLap\"|\"\"|0|0|1";

fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn extract(content: &str, config: &RcpLogConfig) -> rcp_log_processor::Result<String> {
    let file = write_log(content);
    let mut out = Vec::new();
    extract_file(file.path(), config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

/// Test the plain round trip of the seven extract columns
///
/// Purpose: Output reproduces the matched header and the row values unchanged
#[test]
fn test_exact_header_round_trip() {
    let header = "\"Interval\",\"Utc\",\"Latitude\",\"Longitude\",\"PredTime\",\"ElapsedTime\",\"CurrentLap\"";
    let content = format!("{}\n1,100,12.34,56.78,0.0,10.5,1\n", header);

    let out = extract(&content, &RcpLogConfig::default()).unwrap();

    assert_eq!(out, content);
}

/// Test extraction from a decorated logger export
///
/// Purpose: Columns are found by prefix among unrelated columns
/// Benefit: Real exports carry units and ranges in every header token
#[test]
fn test_decorated_export() {
    let content = format!(
        "{}\n\
         0,1700000000000,0.01,-37.81,144.96,61.2,0.0,0.0,1\n\
         50,1700000000050,0.02,,144.96,61.3,0.0,0.0008,1\n\
         100,1700000000100,-0.03,-37.82,144.97,61.5,1.52,0.0016,1\n",
        DECORATED_HEADER
    );

    let out = extract(&content, &RcpLogConfig::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("\"Interval\"|\"ms\"|0|0|1,\"Utc\"|\"ms\"|0|0|1,\"Latitude\""));
    assert!(!lines[0].contains("AccelX"));
    assert_eq!(lines[1], "0,1700000000000,-37.81,144.96,0.0,0.0,1");
    assert_eq!(lines[2], "100,1700000000100,-37.82,144.97,1.52,0.0016,1");
}

/// Test that a header missing one prefix names exactly that column
#[test]
fn test_missing_header_is_fatal() {
    let content = "\"Interval\",\"Utc\",\"Latitude\",\"Longitude\",\"PredTime\",\"ElapsedTime\"\n1,2,3,4,5,6\n";

    let error = extract(content, &RcpLogConfig::default()).unwrap_err();

    assert_eq!(error.missing_columns(), &["\"CurrentLap\"".to_string()]);
    assert_eq!(error.exit_code(), 1);
}

/// Test that an overflowing data line aborts instead of truncating
#[test]
fn test_overflowing_line_is_fatal() {
    let config = RcpLogConfig::default()
        .with_max_line_len(64)
        .with_extract_columns(["\"A\"", "\"B\""]);
    let content = format!("\"A\",\"B\"\n1,2\n3,{}\n", "9".repeat(80));

    let error = extract(&content, &config).unwrap_err();

    assert!(matches!(
        error,
        Error::LineOverflow {
            line: 3,
            capacity: 64
        }
    ));
}

/// Test that a missing input file is an I/O error
///
/// Purpose: The rendered message names the file and keeps the OS reason
#[test]
fn test_unreadable_file() {
    let path = std::path::Path::new("/nonexistent/log.csv");
    let os_reason = std::fs::File::open(path).unwrap_err().to_string();

    let mut out = Vec::new();
    let error = extract_file(path, &RcpLogConfig::default(), &mut out).unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
    let message = format!("{:#}", error);
    assert!(message.contains("Unable to open /nonexistent/log.csv"), "{}", message);
    assert!(message.ends_with(&os_reason), "{}", message);
}

/// Test a Latin-1 export with a degree sign in a header decoration and a value
///
/// Purpose: Bytes that are not UTF-8 reach the output unchanged
#[test]
fn test_latin1_bytes_pass_through() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\"Latitude\"|\"\xB0\",\"Utc\"\n12.5\xB0,100\n")
        .unwrap();
    file.flush().unwrap();
    let config = RcpLogConfig::default().with_extract_columns(["\"Latitude\"", "\"Utc\""]);

    let mut out = Vec::new();
    let stats = extract_file(file.path(), &config, &mut out).unwrap();

    assert_eq!(out, b"\"Latitude\"|\"\xB0\",\"Utc\"\n12.5\xB0,100\n");
    assert_eq!(stats.rows_emitted, 1);
}
