//! Header-resolved CSV row reader
//!
//! The reader consumes the first line as the header, resolves its
//! [`ColumnSchema`] against it, and then projects every data line onto the
//! schema's logical columns by direct physical-index lookup.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::field_parsers::trim_field;
use super::line_reader::LineReader;
use super::schema::ColumnSchema;
use super::stats::ReadStats;
use crate::app::models::LogicalRow;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Reader for logs whose required columns are located by header prefix
///
/// Each reader owns its input and its resolved schema; rows are returned as
/// owned values so nothing borrows the line buffer across reads.
#[derive(Debug)]
pub struct CsvReader<R> {
    lines: LineReader<R>,
    schema: ColumnSchema,
    stats: ReadStats,
}

impl CsvReader<BufReader<File>> {
    /// Open a log file and resolve `schema` against its header line
    pub fn open(path: &Path, schema: ColumnSchema, max_line_len: usize) -> Result<Self> {
        info!("Opening telemetry log: {}", path.display());

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Unable to open {}", path.display()), e))?;

        Self::from_reader(BufReader::new(file), schema, max_line_len)
    }
}

impl<R: BufRead> CsvReader<R> {
    /// Resolve `schema` against the first line of `reader`
    ///
    /// Input with no lines at all is treated as an empty header, so every
    /// column is reported missing.
    pub fn from_reader(reader: R, mut schema: ColumnSchema, max_line_len: usize) -> Result<Self> {
        let mut lines = LineReader::new(reader, max_line_len);

        match lines.next_line()? {
            Some(header) => schema.resolve(header.bytes)?,
            None => {
                warn!("Input has no header line");
                schema.resolve("")?;
            }
        }

        debug!(
            "Resolved {} columns, last physical index {:?}",
            schema.len(),
            schema.max_physical_index()
        );

        Ok(Self {
            lines,
            schema,
            stats: ReadStats::new(),
        })
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Give back the resolved schema, e.g. to reset and reuse it
    pub fn into_schema(self) -> ColumnSchema {
        self.schema
    }

    /// Read the next data line projected onto the schema, or `None` at end of input
    ///
    /// The row always has one slot per logical column. Callers must check
    /// [`LogicalRow::is_complete`] before using the values.
    pub fn read_row(&mut self) -> Result<Option<LogicalRow>> {
        let Some(line) = self.lines.next_line()? else {
            return Ok(None);
        };

        let mut values = vec![Vec::new(); self.schema.len()];
        let mut filled = 0;

        // Tokens past the last bound index can never produce output
        if let Some(last_index) = self.schema.max_physical_index() {
            let tokens = line.bytes.split(|b| *b == FIELD_DELIMITER);
            for (index, raw) in tokens.take(last_index + 1).enumerate() {
                if let Some(position) = self.schema.logical_position(index) {
                    let token = trim_field(raw);
                    if !token.is_empty() {
                        filled += 1;
                    }
                    values[position] = token.to_vec();
                }
            }
        }

        self.stats.rows_read += 1;

        Ok(Some(LogicalRow {
            values,
            filled,
            line_number: line.number,
        }))
    }

    /// Read rows until a fully populated one is found, skipping the rest
    pub fn next_complete_row(&mut self) -> Result<Option<LogicalRow>> {
        while let Some(row) = self.read_row()? {
            if row.is_complete() {
                self.stats.rows_emitted += 1;
                return Ok(Some(row));
            }

            self.stats.rows_skipped += 1;
            debug!(
                "Skipped line {}: {} of {} columns filled",
                row.line_number,
                row.filled,
                row.values.len()
            );
        }

        Ok(None)
    }
}
