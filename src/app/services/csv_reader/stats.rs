//! Row reading statistics

/// Counts of data rows seen by a reader
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReadStats {
    /// Data lines read after the header
    pub rows_read: usize,

    /// Rows handed on as fully populated
    pub rows_emitted: usize,

    /// Rows discarded as incomplete or malformed
    pub rows_skipped: usize,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of read rows that were skipped
    pub fn skip_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_skipped as f64 / self.rows_read as f64) * 100.0
        }
    }
}
