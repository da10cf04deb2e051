//! Pure column extraction
//!
//! Echoes the matched header names followed by every fully populated row,
//! values comma-joined in schema order. Bytes are copied as read, whatever
//! their encoding.

use std::io::{BufRead, Write};
use tracing::info;

use crate::app::services::csv_reader::{ColumnSchema, CsvReader, ReadStats};
use crate::config::RcpLogConfig;
use crate::{Error, Result};

/// Unresolved schema of the configured extract columns
pub fn extract_schema(config: &RcpLogConfig) -> ColumnSchema {
    ColumnSchema::new(config.extract_columns.iter().cloned())
}

/// Copy the resolved columns of every complete row to `out`
pub fn extract_rows<R: BufRead, W: Write>(
    reader: &mut CsvReader<R>,
    out: &mut W,
) -> Result<ReadStats> {
    let write_error = |e| Error::io("Failed to write output", e);

    write_line(out, &reader.schema().header_line()).map_err(write_error)?;

    while let Some(row) = reader.next_complete_row()? {
        write_line(out, &row.to_csv_line()).map_err(write_error)?;
    }

    out.flush().map_err(write_error)?;

    let stats = reader.stats().clone();
    info!(
        "Extracted {} of {} rows ({:.1}% skipped)",
        stats.rows_emitted,
        stats.rows_read,
        stats.skip_rate()
    );

    Ok(stats)
}

fn write_line<W: Write>(out: &mut W, line: &[u8]) -> std::io::Result<()> {
    out.write_all(line)?;
    out.write_all(b"\n")
}
