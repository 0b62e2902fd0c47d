//! Truncating output sink used by every render path.

use core::fmt;

use crate::utf8;

/// Writes rendered text into a borrowed byte buffer, reserving the final
/// byte for the NUL terminator.
///
/// The first write that does not fit is cut back to a codepoint boundary,
/// the writer is marked truncated, and every later write is dropped. This
/// keeps the output a prefix of the untruncated rendering.
///
/// Implementors of [`FormatArg`](super::FormatArg) receive a `Writer` and
/// can use [`write_bytes`](Writer::write_bytes) or `core::fmt::Write`.
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> Writer<'a> {
    /// Create a writer over `buf`. The last byte of `buf` is kept for the
    /// terminator written by [`finish`](Writer::finish).
    #[inline]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// Bytes written so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Bytes that can still be written.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(1) - self.pos
    }

    /// True once any write has been cut short.
    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Append `bytes`, truncating if they do not fit.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.truncated {
            return;
        }
        let room = self.remaining();
        let take = if bytes.len() <= room {
            bytes.len()
        } else {
            self.truncated = true;
            utf8::floor_char_boundary(bytes, room)
        };
        self.buf[self.pos..self.pos + take].copy_from_slice(&bytes[..take]);
        self.pos += take;
    }

    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    /// Terminate the output and return its length.
    pub(crate) fn finish(self) -> usize {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        self.pos
    }
}

impl fmt::Write for Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write as _;

    #[test]
    fn test_reserves_terminator() {
        let mut buf = [0xAAu8; 4];
        let mut w = Writer::new(&mut buf);
        assert_eq!(w.remaining(), 3);
        w.write_bytes(b"abc");
        assert!(!w.is_truncated());
        assert_eq!(w.finish(), 3);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn test_truncates_and_drops_later_writes() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        w.write_bytes(b"ab");
        w.write_bytes(b"cde");
        assert!(w.is_truncated());
        // Would fit in a fresh writer, but output must stay a prefix
        w.write_bytes(b"");
        w.write_byte(b'z');
        assert_eq!(w.finish(), 3);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn test_truncation_respects_codepoints() {
        let mut buf = [0u8; 5];
        let mut w = Writer::new(&mut buf);
        w.write_bytes("aあい".as_bytes());
        assert!(w.is_truncated());
        assert_eq!(w.finish(), 4);
        assert_eq!(&buf[..4], "aあ".as_bytes());
    }

    #[test]
    fn test_fmt_write() {
        let mut buf = [0u8; 16];
        let mut w = Writer::new(&mut buf);
        write!(w, "{}-{}", 1.5, 'x').unwrap();
        let len = w.finish();
        assert_eq!(&buf[..len], b"1.5-x");
    }

    #[test]
    fn test_single_byte_buffer() {
        let mut buf = [0xFFu8; 1];
        let mut w = Writer::new(&mut buf);
        w.write_byte(b'a');
        assert!(w.is_truncated());
        assert_eq!(w.finish(), 0);
        assert_eq!(buf, [0]);
    }
}
