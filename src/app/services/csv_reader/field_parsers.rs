//! Field parsing utilities for logical rows
//!
//! This module provides the token trimming shared by header resolution and row
//! reading, and numeric accessors for values of a [`LogicalRow`].
//!
//! Numeric parsing is lenient: the longest leading numeric prefix of a value
//! is used and a value with no such prefix reads as zero. A fully populated
//! row therefore always yields numbers and is never dropped for its content.

use crate::app::models::LogicalRow;

fn is_blank(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == 0x0b
}

/// Trim leading and trailing ASCII whitespace (including vertical tab)
pub fn trim_field(value: &[u8]) -> &[u8] {
    let start = value
        .iter()
        .position(|b| !is_blank(b))
        .unwrap_or(value.len());
    let end = value
        .iter()
        .rposition(|b| !is_blank(b))
        .map_or(start, |last| last + 1);

    &value[start..end]
}

/// Leading integer of `value`: optional sign then decimal digits, else 0
pub fn leading_i64(value: &[u8]) -> i64 {
    let value = trim_field(value);
    let (negative, digits) = match value.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, value),
    };

    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Leading decimal number of `value`, with optional fraction and exponent, else 0.0
pub fn leading_f64(value: &[u8]) -> f64 {
    let value = trim_field(value);
    let len = numeric_prefix_len(value);

    std::str::from_utf8(&value[..len])
        .ok()
        .and_then(|number| number.parse().ok())
        .unwrap_or(0.0)
}

/// Length of the `[+-]digits[.digits][(e|E)[+-]digits]` prefix, 0 without mantissa digits
fn numeric_prefix_len(value: &[u8]) -> usize {
    let digits_end = |start: usize| {
        start
            + value[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let sign = usize::from(matches!(value.first(), Some(b'+' | b'-')));
    let mut end = digits_end(sign);
    let mut mantissa_digits = end - sign;

    if value.get(end) == Some(&b'.') {
        let fraction_end = digits_end(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(value.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(value.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_end(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    end
}

/// Integer value of the logical column at `position`
pub fn field_i64(row: &LogicalRow, position: usize) -> i64 {
    row.get(position).map_or(0, leading_i64)
}

/// Integer value saturated to the i32 range
pub fn field_i32(row: &LogicalRow, position: usize) -> i32 {
    let value = field_i64(row, position).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    value as i32
}

/// Floating point value of the logical column at `position`
pub fn field_f64(row: &LogicalRow, position: usize) -> f64 {
    row.get(position).map_or(0.0, leading_f64)
}
