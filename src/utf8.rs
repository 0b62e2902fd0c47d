//! UTF-8 byte helpers used by the views and the formatter.
//!
//! These work on raw bytes and never validate: a byte that is not a valid
//! lead byte is treated as a one-byte unit so that counting always
//! terminates and always advances.

/// Width in bytes of the sequence introduced by `lead`.
///
/// ```
/// use fixtext::utf8::char_byte_length;
///
/// assert_eq!(char_byte_length(b'A'), 1);
/// assert_eq!(char_byte_length(0xE3), 3);
/// ```
#[inline]
#[must_use]
pub const fn char_byte_length(lead: u8) -> usize {
    if lead & 0x80 == 0x00 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        // Stray continuation or invalid lead byte
        1
    }
}

/// True for `10xxxxxx` continuation bytes.
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Count the codepoints in `bytes` by walking lead bytes.
#[must_use]
pub const fn count_chars(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += char_byte_length(bytes[i]);
        count += 1;
    }
    count
}

/// Largest index `<= index` that does not fall inside a multi-byte sequence.
///
/// Only a lead byte whose sequence reaches past `index` moves the cut back.
/// Stray continuation bytes are cut like single bytes, so invalid input
/// loses nothing before `index`. Indices at or past the end return
/// `bytes.len()`.
#[must_use]
pub fn floor_char_boundary(bytes: &[u8], index: usize) -> usize {
    if index >= bytes.len() {
        return bytes.len();
    }
    // A lead byte is at most 3 bytes before any of its continuations
    let lowest = index.saturating_sub(3);
    let mut i = index;
    while i > lowest && is_continuation(bytes[i]) {
        i -= 1;
    }
    if i < index && !is_continuation(bytes[i]) && i + char_byte_length(bytes[i]) > index {
        i
    } else {
        index
    }
}

/// Longest prefix of `bytes` that is valid UTF-8.
#[must_use]
pub fn valid_prefix(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_byte_length() {
        assert_eq!(char_byte_length(b'A'), 1);
        assert_eq!(char_byte_length(0xC0), 2);
        assert_eq!(char_byte_length(0xE0), 3);
        assert_eq!(char_byte_length(0xF0), 4);
        assert_eq!(char_byte_length(0x80), 1);
        assert_eq!(char_byte_length(0xFF), 1);
    }

    #[test]
    fn test_count_chars_mixed() {
        // 1 + 3 + 4 bytes
        assert_eq!(count_chars("Aあ😀".as_bytes()), 3);
        assert_eq!(count_chars("Hello世界".as_bytes()), 7);
        assert_eq!(count_chars(b""), 0);
    }

    #[test]
    fn test_floor_char_boundary() {
        let bytes = "aあb".as_bytes(); // a, E3 81 82, b
        assert_eq!(floor_char_boundary(bytes, 0), 0);
        assert_eq!(floor_char_boundary(bytes, 1), 1);
        assert_eq!(floor_char_boundary(bytes, 2), 1);
        assert_eq!(floor_char_boundary(bytes, 3), 1);
        assert_eq!(floor_char_boundary(bytes, 4), 4);
        assert_eq!(floor_char_boundary(bytes, 99), 5);
    }

    #[test]
    fn test_floor_char_boundary_invalid_bytes() {
        // Continuations with no lead are cut where asked
        assert_eq!(floor_char_boundary(&[0x80; 20], 7), 7);

        // ASCII followed by stray continuations keeps the ASCII
        let bytes = [b'a', b'b', 0xBF, 0xBF, 0xBF, 0xBF, 0xBF, 0xBF, 0xBF];
        assert_eq!(floor_char_boundary(&bytes, 2), 2);
        assert_eq!(floor_char_boundary(&bytes, 7), 7);

        // A two-byte lead does not reach a cut three bytes later
        let bytes = [0xC3, 0xA9, 0x80, 0x80];
        assert_eq!(floor_char_boundary(&bytes, 1), 0);
        assert_eq!(floor_char_boundary(&bytes, 3), 3);

        // Four-byte sequence cut at its last byte
        let bytes = "x😀".as_bytes();
        assert_eq!(floor_char_boundary(bytes, 4), 1);
    }

    #[test]
    fn test_valid_prefix() {
        assert_eq!(valid_prefix(b"abc"), "abc");
        assert_eq!(valid_prefix(&[b'o', b'k', 0xE3, 0x81]), "ok");
    }
}
