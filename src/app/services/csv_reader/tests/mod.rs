//! Test utilities for the CSV reader
//!
//! This module provides sample log content and helper functions shared by
//! the reader test modules.

use crate::app::models::LogicalRow;
use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod reader_tests;

/// Header of a logger export with the extract columns scattered among others
pub const SCATTERED_HEADER: &str = "\"Interval\"|\"ms\"|0|0|1, \"Utc\"|\"ms\"|0|0|1, \"Battery\"|\"Volts\"|0|20|1, \"Latitude\"|\"Degrees\"|-180.0|180.0|10, \"Longitude\"|\"Degrees\"|-180.0|180.0|10, \"Speed\"|\"mph\"|0.0|150.0|10, \"PredTime\"|\"Min\"|0.0|1000.0|5, \"ElapsedTime\"|\"Min\"|0.0|1000.0|10, \"CurrentLap\"|\"\"|0|0|1";

/// Helper to create minimal extract-column log content
pub fn create_extract_log() -> String {
    r#""Interval","Utc","Latitude","Longitude","PredTime","ElapsedTime","CurrentLap"
1,100,12.34,56.78,0.0,10.5,1
2,200,12.35,56.79,0.0,10.6,1
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Extract-column prefixes as owned strings
pub fn extract_prefixes() -> Vec<String> {
    crate::constants::EXTRACT_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Row values as text, for comparing ASCII fixtures
pub fn row_text(row: &LogicalRow) -> Vec<String> {
    row.values
        .iter()
        .map(|value| String::from_utf8_lossy(value).into_owned())
        .collect()
}
