//! Fixed-capacity inline byte buffer.

use core::fmt;
use core::ops::Index;

use crate::span::Span;

/// Up to `N` bytes stored inline, with no heap allocation.
///
/// `append` either stores the byte or reports failure and leaves the buffer
/// untouched; `len() <= N` holds at every point. Indexing never panics: an
/// out-of-range index reads as `0`.
///
/// # Example
///
/// ```
/// use fixtext::FixedBuffer;
///
/// let mut buf = FixedBuffer::<4>::new();
/// for b in [0x01, 0x02, 0x03, 0x04] {
///     assert!(buf.append(b));
/// }
/// assert!(!buf.append(0x05));
/// assert_eq!(buf.len(), 4);
/// assert_eq!(buf[100], 0);
/// ```
#[derive(Clone)]
pub struct FixedBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuffer<N> {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            len: 0,
        }
    }

    /// Create a buffer holding the first `min(N, bytes.len())` bytes.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = Self::new();
        buf.from_span(Span::new(bytes));
        buf
    }

    /// Append one byte. Returns `false` when the buffer is full.
    #[inline]
    pub fn append(&mut self, byte: u8) -> bool {
        if self.len >= N {
            return false;
        }
        self.data[self.len] = byte;
        self.len += 1;
        true
    }

    /// Append all of `bytes`, or nothing if they do not fit.
    pub fn append_slice(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > N - self.len {
            return false;
        }
        self.data[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        true
    }

    /// Replace the contents with a copy of `view`.
    ///
    /// Copies `min(N, view.len())` bytes and silently drops the rest.
    /// Returns the number of bytes copied.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_span(&mut self, view: Span<'_, u8>) -> usize {
        let count = view.len().min(N);
        self.data[..count].copy_from_slice(&view.as_slice()[..count]);
        self.len = count;
        count
    }

    /// Drop all content. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Byte at `index`, or `0` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.as_slice().get(index).copied().unwrap_or(0)
    }

    /// The live content.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Zero-copy view over the live content.
    #[inline]
    #[must_use]
    pub fn as_span(&self) -> Span<'_, u8> {
        Span::new(self.as_slice())
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.as_slice().iter()
    }

    /// Copy the content into a `heapless::Vec`.
    #[cfg(feature = "heapless")]
    #[must_use]
    pub fn to_vec(&self) -> heapless::Vec<u8, N> {
        let mut vec = heapless::Vec::new();
        // Content never exceeds N
        let _ = vec.extend_from_slice(self.as_slice());
        vec
    }

    /// Write the content to an `embedded_io::Write` implementation.
    ///
    /// # Errors
    ///
    /// Returns the writer's error if the write fails.
    #[cfg(feature = "embedded-io")]
    pub fn write_to<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.write_all(self.as_slice())
    }
}

impl<const N: usize> Default for FixedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for FixedBuffer<N> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        self.as_slice().get(index).unwrap_or(&0)
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedBuffer<M>> for FixedBuffer<N> {
    fn eq(&self, other: &FixedBuffer<M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for FixedBuffer<N> {}

impl<const N: usize> PartialEq<[u8]> for FixedBuffer<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, const N: usize> IntoIterator for &'a FixedBuffer<N> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> fmt::Debug for FixedBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for FixedBuffer<N> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=[u8]:x}", self.as_slice());
    }
}
