//! Column-count consistency check for CSV files
//!
//! Every line must have as many comma-separated columns as the first one.
//! A blank line counts as zero columns.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::csv_reader::LineReader;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Shape of a consistent CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnReport {
    /// Columns per line, taken from the first line
    pub columns: usize,

    /// Total number of lines
    pub rows: usize,
}

/// Number of comma-separated columns in a line
pub fn count_columns(line: &[u8]) -> usize {
    if line.is_empty() {
        0
    } else {
        line.iter().filter(|b| **b == FIELD_DELIMITER).count() + 1
    }
}

/// Check every line of `reader` against the first line's column count
///
/// Fails with the 1-based number of the first deviating line.
pub fn validate_columns<R: BufRead>(reader: R, max_line_len: usize) -> Result<ColumnReport> {
    let mut lines = LineReader::new(reader, max_line_len);
    let mut report = ColumnReport::default();

    while let Some(line) = lines.next_line()? {
        let actual = count_columns(line.bytes);
        report.rows = line.number;

        if line.number == 1 {
            report.columns = actual;
            debug!("Expecting {} columns per row", actual);
        } else if actual != report.columns {
            return Err(Error::inconsistent_columns(
                line.number,
                report.columns,
                actual,
            ));
        }
    }

    Ok(report)
}

/// Open `path` and check its column counts
pub fn validate_file(path: &Path, max_line_len: usize) -> Result<ColumnReport> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Unable to open {}", path.display()), e))?;

    let report = validate_columns(BufReader::new(file), max_line_len)?;
    info!(
        "{} is consistent: {} columns, {} rows",
        path.display(),
        report.columns,
        report.rows
    );

    Ok(report)
}
