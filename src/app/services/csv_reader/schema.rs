//! Column schema resolution against a CSV header line
//!
//! A schema is an ordered list of required logical columns, each identified
//! by a header-name prefix. Resolution walks the header tokens once, binds
//! each logical column to the physical index of the first token it prefixes,
//! and builds a direct physical-to-logical lookup used for every data row.

use super::field_parsers::trim_field;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};
use tracing::{debug, warn};

/// A required column, matched by header prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalColumn {
    /// Configured prefix, including any quoting present in the log
    prefix: String,

    /// Exact header token the prefix matched, as raw bytes
    matched_name: Option<Vec<u8>>,

    /// Physical position of the matched token
    resolved_index: Option<usize>,
}

impl LogicalColumn {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            matched_name: None,
            resolved_index: None,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Matched header token once resolved, otherwise the configured prefix
    pub fn name(&self) -> &[u8] {
        self.matched_name
            .as_deref()
            .unwrap_or(self.prefix.as_bytes())
    }

    pub fn resolved_index(&self) -> Option<usize> {
        self.resolved_index
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_index.is_some()
    }

    /// Byte-prefix match; trailing decoration on the token is ignored
    pub fn matches(&self, token: &[u8]) -> bool {
        token.starts_with(self.prefix.as_bytes())
    }

    fn bind(&mut self, index: usize, token: &[u8]) {
        self.resolved_index = Some(index);
        self.matched_name = Some(token.to_vec());
    }

    fn reset(&mut self) {
        self.resolved_index = None;
        self.matched_name = None;
    }
}

/// Ordered set of logical columns; order is output order, not file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<LogicalColumn>,

    /// Logical position for each physical index up to the last resolved one
    physical_to_logical: Vec<Option<usize>>,
}

impl ColumnSchema {
    /// Create an unresolved schema from header prefixes
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: prefixes.into_iter().map(LogicalColumn::new).collect(),
            physical_to_logical: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[LogicalColumn] {
        &self.columns
    }

    /// Whether every column has been bound to a physical index
    pub fn is_resolved(&self) -> bool {
        self.columns.iter().all(LogicalColumn::is_resolved)
    }

    /// Column names in schema order (matched tokens once resolved)
    pub fn names(&self) -> impl Iterator<Item = &[u8]> {
        self.columns.iter().map(LogicalColumn::name)
    }

    /// Column names comma-joined in schema order, bytes as they appeared
    pub fn header_line(&self) -> Vec<u8> {
        self.names().collect::<Vec<_>>().join(&FIELD_DELIMITER)
    }

    /// Logical position of the column with the given configured prefix
    pub fn position_of(&self, prefix: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.prefix == prefix)
    }

    /// Logical position bound to a physical index, if any
    pub fn logical_position(&self, physical_index: usize) -> Option<usize> {
        self.physical_to_logical
            .get(physical_index)
            .copied()
            .flatten()
    }

    /// Highest physical index any column is bound to
    pub fn max_physical_index(&self) -> Option<usize> {
        self.physical_to_logical.len().checked_sub(1)
    }

    /// Bind every column to a token of `header_line`
    ///
    /// Tokens are visited in file order; each token binds to the first
    /// still-unbound column, in schema order, whose prefix it starts with.
    /// If any column remains unbound the schema is left unresolved and the
    /// error lists every unmatched prefix.
    pub fn resolve(&mut self, header_line: impl AsRef<[u8]>) -> Result<()> {
        if self.columns.iter().any(LogicalColumn::is_resolved) {
            return Err(Error::SchemaAlreadyResolved);
        }

        let header_line = header_line.as_ref();
        for (index, raw) in header_line.split(|b| *b == FIELD_DELIMITER).enumerate() {
            let token = trim_field(raw);

            if let Some(column) = self
                .columns
                .iter_mut()
                .filter(|c| !c.is_resolved())
                .find(|c| c.matches(token))
            {
                column.bind(index, token);
            }
        }

        let missing: Vec<String> = self
            .columns
            .iter()
            .filter(|c| !c.is_resolved())
            .map(|c| c.prefix.clone())
            .collect();

        if !missing.is_empty() {
            for prefix in &missing {
                warn!("Missing header {}", prefix);
            }
            self.reset();
            return Err(Error::schema_resolution(missing));
        }

        self.build_lookup();

        for column in &self.columns {
            debug!(
                "Found header {} at column index {}",
                String::from_utf8_lossy(column.name()),
                column.resolved_index.unwrap_or_default()
            );
        }

        Ok(())
    }

    /// Clear all bindings so the schema can resolve another header
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.reset();
        }
        self.physical_to_logical.clear();
    }

    fn build_lookup(&mut self) {
        let Some(max_index) = self.columns.iter().filter_map(|c| c.resolved_index).max() else {
            self.physical_to_logical.clear();
            return;
        };

        let mut lookup = vec![None; max_index + 1];
        for (position, column) in self.columns.iter().enumerate() {
            if let Some(index) = column.resolved_index {
                lookup[index] = Some(position);
            }
        }

        self.physical_to_logical = lookup;
    }
}
