//! Decimal formatting helper for integers.

use std::io::{self, Write};

/// Standard decimal form of `value`: no leading zeros, `-` for negatives.
pub fn format_value(value: i64) -> String {
    value.to_string()
}

/// Write the decimal form of `value` to `out`, without a trailing newline.
pub fn emit_to<W: Write + ?Sized>(out: &mut W, value: i64) -> io::Result<()> {
    write!(out, "{value}")
}

/// Write the decimal form of `value` to stdout, without a trailing newline.
pub fn format_and_emit(value: i64) {
    print!("{value}");
}
