//! Fixed-capacity, NUL-terminated text buffer.

use core::cmp::Ordering;
use core::ffi::CStr;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use crate::format::Writer;
use crate::string_view::StringView;
use crate::utf8;

/// Text stored inline in `N` bytes, always followed by a NUL terminator.
///
/// The terminator occupies one of the `N` bytes, so the content is at most
/// `N - 1` bytes long: [`capacity`] is `N`, [`byte_length`] is the live
/// content length. Text that does not fit is cut back to a codepoint
/// boundary, so content built from valid UTF-8 stays valid.
///
/// Every render into a `FixedString` (see [`format_to`]) replaces the whole
/// content; there is no append API.
///
/// `N` must be at least 1; `FixedString<0>` fails to compile when constructed.
///
/// [`capacity`]: FixedString::capacity
/// [`byte_length`]: FixedString::byte_length
/// [`format_to`]: crate::format::format_to
///
/// # Example
///
/// ```
/// use fixtext::FixedString;
///
/// let s = FixedString::<6>::from_str_truncated("Hello World");
/// assert_eq!(s.as_str(), "Hello");
/// assert_eq!(s.byte_length(), 5);
/// assert_eq!(s.c_str().to_bytes(), b"Hello");
/// ```
#[derive(Clone)]
pub struct FixedString<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FixedString<N> {
    const NONZERO: () = assert!(N > 0, "FixedString needs room for the NUL terminator");

    /// Longest content this string can hold.
    pub const MAX_LEN: usize = N - 1;

    /// Create an empty string.
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::NONZERO;
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Copy `view`, truncated to fit.
    #[must_use]
    pub fn from_view(view: StringView<'_>) -> Self {
        let mut s = Self::new();
        s.assign(view);
        s
    }

    /// Copy `text`, truncated to fit.
    #[must_use]
    pub fn from_str_truncated(text: &str) -> Self {
        Self::from_view(StringView::new(text))
    }

    /// Replace the content with a copy of `view`, truncated to fit.
    ///
    /// Returns `false` if the copy was truncated.
    pub fn assign(&mut self, view: StringView<'_>) -> bool {
        self.overwrite(|w| w.write_bytes(view.as_bytes()))
    }

    /// Empty the string.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }

    /// Total storage in bytes, including the terminator.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Content length in bytes, excluding the terminator.
    ///
    /// Counts every stored byte, including interior NULs, so it can exceed
    /// the length seen through [`c_str`](FixedString::c_str).
    #[inline]
    #[must_use]
    pub const fn byte_length(&self) -> usize {
        self.len
    }

    /// Content length in codepoints.
    #[inline]
    #[must_use]
    pub fn char_length(&self) -> usize {
        utf8::count_chars(self.as_bytes())
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Content bytes, without the terminator.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Content bytes including the trailing NUL.
    #[inline]
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Content as text.
    ///
    /// Content that came from invalid UTF-8 is cut at the first invalid byte.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        utf8::valid_prefix(self.as_bytes())
    }

    #[inline]
    #[must_use]
    pub fn as_view(&self) -> StringView<'_> {
        StringView::from_bytes(self.as_bytes())
    }

    /// NUL-terminated access for C-style consumers.
    ///
    /// Content containing an interior NUL is seen up to that NUL.
    #[must_use]
    pub fn c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Clear the content and hand a writer over the storage to `render`.
    ///
    /// Returns `false` if anything `render` wrote was truncated.
    pub(crate) fn overwrite<F>(&mut self, render: F) -> bool
    where
        F: FnOnce(&mut Writer<'_>),
    {
        let mut writer = Writer::new(&mut self.buf);
        render(&mut writer);
        let complete = !writer.is_truncated();
        self.len = writer.finish();
        complete
    }

    /// Copy the content into a `heapless::String`.
    #[cfg(feature = "heapless")]
    #[must_use]
    pub fn to_heapless(&self) -> heapless::String<N> {
        let mut s = heapless::String::new();
        // Content is at most N - 1 bytes
        let _ = s.push_str(self.as_str());
        s
    }

    /// Write the content (without terminator) to an `embedded_io::Write`
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns the writer's error if the write fails.
    #[cfg(feature = "embedded-io")]
    pub fn write_to<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.write_all(self.as_bytes())
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for FixedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedString<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> From<&str> for FixedString<N> {
    fn from(text: &str) -> Self {
        Self::from_str_truncated(text)
    }
}

impl<'a, const N: usize> From<StringView<'a>> for FixedString<N> {
    fn from(view: StringView<'a>) -> Self {
        Self::from_view(view)
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedString<M>> for FixedString<N> {
    fn eq(&self, other: &FixedString<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize> PartialEq<str> for FixedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<StringView<'_>> for FixedString<N> {
    fn eq(&self, other: &StringView<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize, const M: usize> PartialOrd<FixedString<M>> for FixedString<N> {
    fn partial_cmp(&self, other: &FixedString<M>) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const N: usize> Ord for FixedString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> Hash for FixedString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for FixedString<N> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_and_terminated() {
        let s = FixedString::<8>::new();
        assert!(s.is_empty());
        assert_eq!(s.byte_length(), 0);
        assert_eq!(s.capacity(), 8);
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert!(s.c_str().is_empty());
    }

    #[test]
    fn test_from_view_fits() {
        let s = FixedString::<16>::from_view(StringView::new("Hello"));
        assert_eq!(s, "Hello");
        assert_eq!(s.byte_length(), 5);
        assert_eq!(s.as_bytes_with_nul(), b"Hello\0");
    }

    #[test]
    fn test_from_view_truncates_to_n_minus_one() {
        let s = FixedString::<4>::from_str_truncated("abcdef");
        assert_eq!(s.as_str(), "abc");
        assert_eq!(s.byte_length(), FixedString::<4>::MAX_LEN);
        assert_eq!(s.c_str().to_bytes(), b"abc");
    }

    #[test]
    fn test_truncation_keeps_codepoints_whole() {
        // Each kana is 3 bytes; 7 content bytes fit two of them
        let s = FixedString::<8>::from_str_truncated("こんにちは");
        assert_eq!(s.as_str(), "こん");
        assert_eq!(s.byte_length(), 6);
        assert_eq!(s.char_length(), 2);
    }

    #[test]
    fn test_truncation_of_invalid_utf8_keeps_n_minus_one() {
        let s = FixedString::<8>::from_view(StringView::from_bytes(&[0x80; 20]));
        assert_eq!(s.byte_length(), 7);
        assert_eq!(s.as_bytes(), &[0x80; 7]);
        assert_eq!(s.as_bytes_with_nul()[7], 0);

        let mut bytes = [0xBFu8; 9];
        bytes[0] = b'a';
        bytes[1] = b'b';
        let s = FixedString::<8>::from_view(StringView::from_bytes(&bytes));
        assert_eq!(s.byte_length(), 7);
        assert_eq!(&s.as_bytes()[..2], b"ab");
        assert_eq!(s.as_str(), "ab");
    }

    #[test]
    fn test_interior_nul_shortens_c_str_only() {
        let s = FixedString::<16>::from_str_truncated("a\0b|1");
        assert_eq!(s.byte_length(), 5);
        assert_eq!(s.c_str().to_bytes(), b"a");
    }

    #[test]
    fn test_single_byte_capacity() {
        let s = FixedString::<1>::from_str_truncated("x");
        assert!(s.is_empty());
        assert_eq!(s.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_assign_replaces_content() {
        let mut s = FixedString::<16>::from_str_truncated("long content");
        assert!(s.assign(StringView::new("hi")));
        assert_eq!(s, "hi");
        assert_eq!(s.as_bytes_with_nul(), b"hi\0");

        assert!(!s.assign(StringView::new("this is far too long")));
        assert_eq!(s.byte_length(), 15);
    }

    #[test]
    fn test_clear() {
        let mut s = FixedString::<16>::from_str_truncated("abc");
        s.clear();
        assert!(s.is_empty());
        assert!(s.c_str().is_empty());
    }

    #[test]
    fn test_utf8_lengths() {
        let s = FixedString::<32>::from_str_truncated("こんにちは");
        assert_eq!(s.byte_length(), 15);
        assert_eq!(s.char_length(), 5);
    }

    #[test]
    fn test_equality_and_ordering() {
        let a = FixedString::<8>::from_str_truncated("abc");
        let b = FixedString::<32>::from_str_truncated("abc");
        let c = FixedString::<8>::from_str_truncated("abd");
        assert!(a == b);
        assert!(a != c);
        assert!(a < c);
        assert_eq!(a.cmp(&c), Ordering::Less);
        assert_eq!(a, StringView::new("abc"));
    }

    #[test]
    fn test_deref_to_str() {
        let s = FixedString::<16>::from_str_truncated("Hello World");
        assert!(s.starts_with("Hello"));
        assert_eq!(s.len(), 11);
    }
}
