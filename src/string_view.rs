//! Borrowed UTF-8 text view.

use core::ffi::CStr;
use core::fmt;

use crate::span::Span;
use crate::utf8;

/// A non-owning view over UTF-8 encoded bytes.
///
/// The view is byte-oriented: lengths, offsets and [`substring`] work in
/// bytes, and the only codepoint-aware operation is [`char_length`].
/// Equality and ordering compare bytes.
///
/// [`substring`]: StringView::substring
/// [`char_length`]: StringView::char_length
///
/// # Example
///
/// ```
/// use fixtext::StringView;
///
/// let sv = StringView::new("こんにちは");
/// assert_eq!(sv.byte_length(), 15);
/// assert_eq!(sv.char_length(), 5);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringView<'a> {
    bytes: &'a [u8],
}

impl<'a> StringView<'a> {
    /// View a string slice.
    #[inline]
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
        }
    }

    /// View raw bytes that are expected to hold UTF-8.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// View a NUL-terminated C string, excluding the terminator.
    #[inline]
    #[must_use]
    pub fn from_c_str(text: &'a CStr) -> Self {
        Self {
            bytes: text.to_bytes(),
        }
    }

    /// An empty view.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// Length in bytes.
    #[inline]
    #[must_use]
    pub const fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Number of codepoints, counted from UTF-8 lead bytes.
    #[inline]
    #[must_use]
    pub const fn char_length(&self) -> usize {
        utf8::count_chars(self.bytes)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte view over the same memory.
    #[inline]
    #[must_use]
    pub const fn as_span(&self) -> Span<'a, u8> {
        Span::new(self.bytes)
    }

    /// The text as `&str`, or `None` if the bytes are not valid UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.bytes).ok()
    }

    /// Byte at `index`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Iterate over the bytes.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'a, u8>> {
        self.bytes.iter().copied()
    }

    /// Sub-view of `len` bytes starting at byte `start`.
    ///
    /// A `start` at or past the end gives an empty view. Otherwise `len` is
    /// clamped to the bytes remaining after `start`.
    #[must_use]
    pub fn substring(&self, start: usize, len: usize) -> Self {
        if start >= self.bytes.len() {
            return Self::empty();
        }
        let len = len.min(self.bytes.len() - start);
        Self::from_bytes(&self.bytes[start..start + len])
    }

    #[must_use]
    pub fn starts_with(&self, prefix: StringView<'_>) -> bool {
        self.bytes.starts_with(prefix.bytes)
    }

    #[must_use]
    pub fn ends_with(&self, suffix: StringView<'_>) -> bool {
        self.bytes.ends_with(suffix.bytes)
    }

    #[must_use]
    pub fn contains(&self, needle: StringView<'_>) -> bool {
        self.find(needle).is_some()
    }

    /// Byte offset of the first occurrence of `needle`.
    ///
    /// An empty needle matches at offset 0.
    #[must_use]
    pub fn find(&self, needle: StringView<'_>) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.bytes
            .windows(needle.bytes.len())
            .position(|window| window == needle.bytes)
    }
}

impl<'a> From<&'a str> for StringView<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a [u8]> for StringView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<&'a CStr> for StringView<'a> {
    fn from(text: &'a CStr) -> Self {
        Self::from_c_str(text)
    }
}

impl PartialEq<str> for StringView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for StringView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl<'a> IntoIterator for StringView<'a> {
    type Item = u8;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for StringView<'_> {
    /// Writes the longest valid UTF-8 prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(utf8::valid_prefix(self.bytes))
    }
}

impl fmt::Debug for StringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Some(s) => fmt::Debug::fmt(s, f),
            None => f.debug_tuple("StringView").field(&self.bytes).finish(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StringView<'_> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", utf8::valid_prefix(self.bytes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let empty = StringView::default();
        assert_eq!(empty.byte_length(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_literal_and_c_str() {
        let sv = StringView::new("Hello");
        assert_eq!(sv.byte_length(), 5);
        assert_eq!(sv, StringView::new("Hello"));

        let sv2 = StringView::from_c_str(c"World");
        assert_eq!(sv2.byte_length(), 5);
        assert_eq!(sv2, "World");
    }

    #[test]
    fn test_utf8_lengths() {
        let japanese = StringView::new("こんにちは");
        assert_eq!(japanese.byte_length(), 15);
        assert_eq!(japanese.char_length(), 5);

        let mixed = StringView::new("Hello世界");
        assert_eq!(mixed.byte_length(), 11);
        assert_eq!(mixed.char_length(), 7);

        let emoji = StringView::new("😀");
        assert_eq!(emoji.byte_length(), 4);
        assert_eq!(emoji.char_length(), 1);
    }

    #[test]
    fn test_substring() {
        let sv = StringView::new("Hello World");
        assert_eq!(sv.substring(0, 5), "Hello");
        assert_eq!(sv.substring(100, 5).byte_length(), 0);
        assert_eq!(sv.substring(11, 1).byte_length(), 0);
        assert_eq!(sv.substring(6, 100).byte_length(), 5);
        assert_eq!(sv.substring(6, 100), "World");
    }

    #[test]
    fn test_comparison() {
        let s1 = StringView::new("Hello");
        let s2 = StringView::new("Hello");
        let s3 = StringView::new("World");
        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert!(s1 < s3);
    }

    #[test]
    fn test_search() {
        let sv = StringView::new("Hello World Hello");
        assert!(sv.starts_with("Hello".into()));
        assert!(!sv.starts_with("World".into()));
        assert!(sv.ends_with("Hello".into()));
        assert!(!sv.ends_with("World".into()));
        assert!(sv.contains("World".into()));
        assert!(!sv.contains("Goodbye".into()));
        assert_eq!(sv.find("World".into()), Some(6));
        assert_eq!(sv.find(StringView::empty()), Some(0));
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        let sv = StringView::new("ab");
        assert!(!sv.contains("abc".into()));
        assert!(!sv.starts_with("abc".into()));
        assert!(!sv.ends_with("abc".into()));
    }

    #[test]
    fn test_iteration() {
        let sv = StringView::new("ABC");
        let mut count = 0;
        for c in sv {
            assert!(c == b'A' || c == b'B' || c == b'C');
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_to_str_rejects_invalid() {
        let bytes = [0xE3u8, 0x81];
        assert_eq!(StringView::from_bytes(&bytes).to_str(), None);
        assert_eq!(StringView::new("ok").to_str(), Some("ok"));
    }
}
