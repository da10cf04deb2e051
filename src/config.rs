//! Configuration management and validation.
//!
//! Provides the configuration structure for line capacity, the columns the
//! `extract` command pulls out, and the replay options, plus YAML loading
//! from an explicit path or the user's config directory.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_LINE_LEN, DEFAULT_PREDICTED_TIME_PRECISION,
    EXTRACT_COLUMNS, MIN_MAX_LINE_LEN, replay_fields,
};
use crate::{Error, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Replay column whose value drives lap transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LapField {
    /// The lap currently in progress
    #[default]
    CurrentLap,
    /// The number of completed laps
    LapCount,
}

impl LapField {
    /// Position of this field within the replay columns
    pub fn column_position(self) -> usize {
        match self {
            LapField::CurrentLap => replay_fields::CURRENT_LAP,
            LapField::LapCount => replay_fields::LAP_COUNT,
        }
    }
}

/// Global configuration for log processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcpLogConfig {
    /// Line capacity in bytes, newline included
    pub max_line_len: usize,

    /// Header prefixes pulled out by the `extract` command
    pub extract_columns: Vec<String>,

    /// Column driving lap transitions during replay
    pub lap_field: LapField,

    /// Decimal places of the synthesized predicted time
    pub predicted_time_precision: usize,
}

impl Default for RcpLogConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            extract_columns: EXTRACT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            lap_field: LapField::default(),
            predicted_time_precision: DEFAULT_PREDICTED_TIME_PRECISION,
        }
    }
}

impl RcpLogConfig {
    /// Create configuration with a custom line capacity
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    /// Create configuration with custom extract columns
    pub fn with_extract_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extract_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Select the column driving lap transitions
    pub fn with_lap_field(mut self, lap_field: LapField) -> Self {
        self.lap_field = lap_field;
        self
    }

    /// Set the decimal places of the synthesized predicted time
    pub fn with_predicted_time_precision(mut self, precision: usize) -> Self {
        self.predicted_time_precision = precision;
        self
    }

    /// Check the configuration for values the reader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_line_len < MIN_MAX_LINE_LEN {
            return Err(Error::configuration(format!(
                "max_line_len must be at least {} bytes, got {}",
                MIN_MAX_LINE_LEN, self.max_line_len
            )));
        }

        validate_prefixes(&self.extract_columns)
    }

    /// Load configuration from `path`, or from the default location when absent
    ///
    /// Falls back to [`RcpLogConfig::default`] if no path is given and no file
    /// exists at the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.is_file()),
        };

        let config = match config_path {
            Some(config_path) => {
                debug!("Loading configuration from {}", config_path.display());
                Self::from_file(&config_path)
                    .map_err(|e| Error::configuration(format!("{:#}", e)))?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML configuration file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_ng::from_str(content).context("Failed to parse YAML")
    }
}

/// Location looked up when no `--config` is given
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Reject empty, blank or duplicated column prefixes
pub fn validate_prefixes(prefixes: &[String]) -> Result<()> {
    if prefixes.is_empty() {
        return Err(Error::configuration("At least one column prefix is required"));
    }

    let mut seen = HashSet::new();
    for prefix in prefixes {
        if prefix.trim().is_empty() {
            return Err(Error::configuration("Column prefixes must not be empty"));
        }
        if !seen.insert(prefix.as_str()) {
            return Err(Error::configuration(format!(
                "Duplicate column prefix {}",
                prefix
            )));
        }
    }

    Ok(())
}
