//! Bounded physical line reading
//!
//! Lines are read into one reusable buffer of fixed capacity. A line that
//! fills the capacity without a terminating newline is an error, never a
//! truncated read.

use crate::{Error, Result};
use std::io::{BufRead, Read};

/// One physical line borrowed from the reader's buffer
///
/// Valid only until the next call to [`LineReader::next_line`].
#[derive(Debug)]
pub struct Line<'a> {
    /// 1-based physical line number
    pub number: usize,

    /// Raw line bytes without the terminating newline, never re-encoded
    pub bytes: &'a [u8],
}

/// Reads newline-terminated lines of at most `capacity` bytes
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    capacity: usize,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// `capacity` counts every byte of a line including its newline
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
            capacity,
            line_number: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of lines read so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, or `None` at end of input
    ///
    /// A final line without a newline is accepted when it is shorter than the
    /// capacity.
    pub fn next_line(&mut self) -> Result<Option<Line<'_>>> {
        self.buf.clear();

        let read = self
            .inner
            .by_ref()
            .take(self.capacity as u64)
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| Error::io(format!("Failed to read line {}", self.line_number + 1), e))?;

        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;

        let terminated = self.buf.last() == Some(&b'\n');
        if !terminated && read >= self.capacity {
            return Err(Error::line_overflow(self.line_number, self.capacity));
        }

        let bytes = if terminated {
            &self.buf[..self.buf.len() - 1]
        } else {
            &self.buf[..]
        };

        Ok(Some(Line {
            number: self.line_number,
            bytes,
        }))
    }
}
