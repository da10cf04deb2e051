//! Header-driven CSV reader for telemetry logs
//!
//! This module reads comma-separated logs whose column order and extra
//! columns are not known in advance. A required set of columns is matched by
//! prefix against the header row once; every data row is then projected onto
//! those columns by physical index.
//!
//! ## Architecture
//!
//! The reader is organized into logical components:
//! - [`schema`] - Logical columns and header resolution
//! - [`line_reader`] - Fixed-capacity line reads with overflow detection
//! - [`reader`] - Row projection onto the resolved schema
//! - [`field_parsers`] - Token trimming and lenient numeric field access
//! - [`stats`] - Row counts for emitted and skipped rows
//!
//! ## Usage
//!
//! ```rust
//! use rcp_log_processor::app::services::csv_reader::{ColumnSchema, CsvReader};
//!
//! # fn example() -> rcp_log_processor::Result<()> {
//! let input = "\"Utc\",\"Speed\"\n100,42.0\n".as_bytes();
//! let schema = ColumnSchema::new(["\"Speed\"", "\"Utc\""]);
//! let mut reader = CsvReader::from_reader(input, schema, 4096)?;
//!
//! while let Some(row) = reader.next_complete_row()? {
//!     println!("{}", String::from_utf8_lossy(&row.to_csv_line()));
//! }
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod line_reader;
pub mod reader;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_reader::LineReader;
pub use reader::CsvReader;
pub use schema::{ColumnSchema, LogicalColumn};
pub use stats::ReadStats;
