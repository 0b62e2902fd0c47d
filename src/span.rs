//! Non-owning contiguous view.

use core::ops::Index;

use crate::string_view::StringView;

/// A borrowed run of `T`.
///
/// `Span` never owns memory; the lifetime `'a` ties it to the storage it
/// views. Every slicing operation clamps to the available elements instead
/// of failing, so a span can be narrowed without bounds bookkeeping.
///
/// # Example
///
/// ```
/// use fixtext::Span;
///
/// let data = [1, 2, 3, 4, 5];
/// let span = Span::new(&data);
/// assert_eq!(span.subspan(1, 3).as_slice(), &[2, 3, 4]);
/// assert_eq!(span.last(10).len(), 5);
/// ```
#[derive(Debug)]
pub struct Span<'a, T> {
    items: &'a [T],
}

impl<'a, T> Span<'a, T> {
    /// View the given slice.
    #[inline]
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// An empty span.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: &[] }
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// The viewed elements as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.items
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.items.iter()
    }

    /// `len` elements starting at `offset`.
    ///
    /// An offset past the end yields an empty span; `len` is clamped to what
    /// remains after `offset`.
    #[must_use]
    pub fn subspan(&self, offset: usize, len: usize) -> Self {
        if offset >= self.items.len() {
            return Self::empty();
        }
        let len = len.min(self.items.len() - offset);
        Self::new(&self.items[offset..offset + len])
    }

    /// The first `count` elements (all of them if fewer).
    #[must_use]
    pub fn first(&self, count: usize) -> Self {
        Self::new(&self.items[..count.min(self.items.len())])
    }

    /// The last `count` elements (all of them if fewer).
    #[must_use]
    pub fn last(&self, count: usize) -> Self {
        let count = count.min(self.items.len());
        Self::new(&self.items[self.items.len() - count..])
    }
}

impl<'a> Span<'a, u8> {
    /// Reinterpret the bytes as UTF-8 text without copying.
    #[inline]
    #[must_use]
    pub const fn as_string_view(&self) -> StringView<'a> {
        StringView::from_bytes(self.items)
    }
}

// Manual impls: a view is copyable regardless of `T`.
impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<T> Default for Span<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for Span<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Span<'_, T> {}

impl<T> Index<usize> for Span<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`, like slice indexing. Use
    /// [`Span::get`] for a checked lookup.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "defmt")]
impl<T: defmt::Format> defmt::Format for Span<'_, T> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}", self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let span: Span<'_, i32> = Span::default();
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_from_array_and_pointer_len() {
        let arr = [1, 2, 3, 4, 5];
        let s = Span::from(&arr);
        assert_eq!(s.len(), 5);
        assert_eq!(s[0], 1);
        assert_eq!(s[4], 5);

        let s2 = Span::new(&arr[..3]);
        assert_eq!(s2.len(), 3);
        assert_eq!(s2[2], 3);
    }

    #[test]
    fn test_iteration() {
        let arr = [10, 20, 30];
        let s = Span::new(&arr);
        assert_eq!(s.iter().sum::<i32>(), 60);
        assert_eq!(s.into_iter().last(), Some(&30));
    }

    #[test]
    fn test_subspan_first_last() {
        let arr = [1, 2, 3, 4, 5];
        let s = Span::new(&arr);

        let sub = s.subspan(1, 3);
        assert_eq!(sub.len(), 3);
        assert_eq!(sub[0], 2);
        assert_eq!(sub[2], 4);

        assert_eq!(s.first(2).as_slice(), &[1, 2]);
        assert_eq!(s.last(2).as_slice(), &[4, 5]);
    }

    #[test]
    fn test_slicing_clamps() {
        let arr = [1, 2, 3];
        let s = Span::new(&arr);
        assert!(s.subspan(3, 1).is_empty());
        assert!(s.subspan(100, 1).is_empty());
        assert_eq!(s.subspan(1, 100).as_slice(), &[2, 3]);
        assert_eq!(s.first(10).len(), 3);
        assert_eq!(s.last(10).len(), 3);
        assert!(s.first(0).is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let arr = [1u8];
        let s = Span::new(&arr);
        assert_eq!(s.get(0), Some(&1));
        assert_eq!(s.get(1), None);
    }

    #[test]
    fn test_bytes_as_string_view() {
        let bytes = [65u8, 66, 67];
        let view = Span::new(&bytes).as_string_view();
        assert_eq!(view.byte_length(), 3);
        assert_eq!(view, "ABC");
    }
}
