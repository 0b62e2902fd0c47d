//! No-std number rendering.
//!
//! Digits are produced into a stack buffer and handed to the [`Writer`] in a
//! single write, so a number is either written whole or cut at the buffer
//! end like any other text.

use super::Writer;

/// Hex digit lookup tables.
const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Digits in `u64::MAX`.
const MAX_DECIMAL_DIGITS: usize = 20;

/// Write `value` as decimal digits into the tail of `buf`.
///
/// Returns the index of the first digit.
#[inline]
fn decimal_tail(buf: &mut [u8], mut value: u64) -> usize {
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            return pos;
        }
    }
}

/// Write an unsigned integer in decimal.
pub(crate) fn write_unsigned(out: &mut Writer<'_>, value: u64) {
    let mut tmp = [0u8; MAX_DECIMAL_DIGITS];
    let start = decimal_tail(&mut tmp, value);
    out.write_bytes(&tmp[start..]);
}

/// Write a signed integer in decimal, with a leading `-` when negative.
pub(crate) fn write_signed(out: &mut Writer<'_>, value: i64) {
    // Sign plus digits of i64::MIN
    let mut tmp = [0u8; MAX_DECIMAL_DIGITS + 1];
    // unsigned_abs handles i64::MIN without overflow
    let mut start = decimal_tail(&mut tmp, value.unsigned_abs());
    if value < 0 {
        start -= 1;
        tmp[start] = b'-';
    }
    out.write_bytes(&tmp[start..]);
}

/// Write `value` in hexadecimal without prefix or padding.
pub(crate) fn write_hex(out: &mut Writer<'_>, value: u64, uppercase: bool) {
    let digits = if uppercase { UPPER_HEX } else { LOWER_HEX };
    let mut tmp = [0u8; 16];
    let mut pos = tmp.len();
    let mut n = value;
    loop {
        pos -= 1;
        tmp[pos] = digits[(n & 0xF) as usize];
        n >>= 4;
        if n == 0 {
            break;
        }
    }
    out.write_bytes(&tmp[pos..]);
}
