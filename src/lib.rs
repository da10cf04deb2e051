//! RaceCapture Log Processor Library
//!
//! A Rust library for reading comma-separated telemetry logs written by a
//! racing lap-timing logger and replaying them through a predictive lap timer.
//!
//! This library provides tools for:
//! - Resolving a required set of columns by header-name prefix, wherever they
//!   sit in the file and whatever unrelated columns surround them
//! - Reading data rows with a fixed line capacity and no silent truncation
//! - Projecting each physical row onto the resolved logical columns
//! - Driving a lap-timing service from the GPS samples of a log
//! - Checking that every row of a CSV has the same column count

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod column_validator;
        pub mod csv_reader;
        pub mod extract;
        pub mod lap_timer;
        pub mod replay;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GeoPoint, GpsSnapshot, LogicalRow};
pub use app::services::csv_reader::{ColumnSchema, CsvReader, LogicalColumn, ReadStats};
pub use config::RcpLogConfig;

/// Result type alias for the log processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for log processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// One or more required header prefixes were not found in the header line
    #[error("Some headers were not matched: missing {}", .missing.join(", "))]
    SchemaResolution { missing: Vec<String> },

    /// The schema already carries resolved indices from an earlier header
    #[error("Column schema is already resolved; reset it before resolving another header")]
    SchemaAlreadyResolved,

    /// A physical line did not fit in the line buffer
    #[error("CSV line {line} larger than buffer ({capacity} bytes)")]
    LineOverflow { line: usize, capacity: usize },

    /// A row's column count differs from the header's
    #[error("Error at row {row}. Expected {expected} columns, got {actual}")]
    InconsistentColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a schema resolution error listing the unmatched prefixes
    pub fn schema_resolution(missing: Vec<String>) -> Self {
        Self::SchemaResolution { missing }
    }

    /// Create a line overflow error
    pub fn line_overflow(line: usize, capacity: usize) -> Self {
        Self::LineOverflow { line, capacity }
    }

    /// Create a column count mismatch error
    pub fn inconsistent_columns(row: usize, expected: usize, actual: usize) -> Self {
        Self::InconsistentColumns {
            row,
            expected,
            actual,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Prefixes that failed to match, if this is a resolution failure
    pub fn missing_columns(&self) -> &[String] {
        match self {
            Self::SchemaResolution { missing } => missing,
            _ => &[],
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InconsistentColumns { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
