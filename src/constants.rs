//! Application constants for the RaceCapture log processor
//!
//! This module contains the line capacity, the column presets for each
//! command, and the output conventions shared across the application.

// =============================================================================
// Input Limits
// =============================================================================

/// Maximum bytes in one physical line, including its terminating newline
///
/// No byte is reserved for a string terminator, so a 4095-byte line plus its
/// newline fits. A C `fgets` buffer of the same size holds one byte less and
/// rejects that line.
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Smallest line capacity accepted by configuration (one byte plus newline)
pub const MIN_MAX_LINE_LEN: usize = 2;

/// Field delimiter used by the logger
pub const FIELD_DELIMITER: u8 = b',';

// =============================================================================
// Column Presets
// =============================================================================

/// Columns extracted by the `extract` command, in output order
pub const EXTRACT_COLUMNS: &[&str] = &[
    "\"Interval\"",
    "\"Utc\"",
    "\"Latitude\"",
    "\"Longitude\"",
    "\"PredTime\"",
    "\"ElapsedTime\"",
    "\"CurrentLap\"",
];

/// Columns read by the `replay` command, in output order
pub const REPLAY_COLUMNS: &[&str] = &[
    "\"Interval\"",
    "\"Utc\"",
    "\"Latitude\"",
    "\"Longitude\"",
    "\"GPSQual\"",
    "\"GPSDOP\"",
    "\"PredTime\"",
    "\"ElapsedTime\"",
    "\"LapCount\"",
    "\"CurrentLap\"",
    "\"LapTime\"",
    "\"Distance\"",
    "\"Speed\"",
];

/// Positions of the replay fields within [`REPLAY_COLUMNS`]
pub mod replay_fields {
    pub const INTERVAL: usize = 0;
    pub const UTC: usize = 1;
    pub const LATITUDE: usize = 2;
    pub const LONGITUDE: usize = 3;
    pub const GPS_QUAL: usize = 4;
    pub const GPS_DOP: usize = 5;
    pub const PRED_TIME: usize = 6;
    pub const ELAPSED_TIME: usize = 7;
    pub const LAP_COUNT: usize = 8;
    pub const CURRENT_LAP: usize = 9;
    pub const LAP_TIME: usize = 10;
    pub const DISTANCE: usize = 11;
    pub const SPEED: usize = 12;
}

/// Header of the synthesized predicted-time column appended by `replay`
///
/// Written in the logger's own `"name"|"units"|min|max|rate` header style.
pub const PRED_TIME_FIXED_HEADER: &str = "\"PredTimeFixed\"|\"Min\"|0.0|5.0|5";

// =============================================================================
// Output
// =============================================================================

/// Decimal places of the synthesized predicted time
pub const DEFAULT_PREDICTED_TIME_PRECISION: usize = 6;

/// Milliseconds per minute, for tiny-millis conversion
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;

// =============================================================================
// Configuration Discovery
// =============================================================================

/// Directory under the user config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "rcp-log";

/// Config file name looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "config.yaml";

// =============================================================================
// Logging
// =============================================================================

/// Tracing target prefix used in the default log filter
pub const LOG_TARGET: &str = "rcp_log_processor";
