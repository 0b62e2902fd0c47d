//! Argument types accepted by the format engine.
//!
//! Every argument renders itself into a [`Writer`] and reports the longest
//! text it can produce. Types with a statically known bound also implement
//! [`BoundedArg`], which is what compile-time capacity computation uses.

use core::ffi::CStr;
use core::fmt::Write as _;

use super::num;
use super::Writer;
use crate::fixed_string::FixedString;
use crate::string_view::StringView;

/// Assumed upper bound for text arguments (`&str`, [`StringView`], `&CStr`).
///
/// Text is not measured when sizing a buffer; longer text is truncated on
/// the auto-sized path. Use an explicit capacity for longer text.
pub const TEXT_MAX_LEN: usize = 64;

/// Upper bound for a rendered `f32` or `f64`.
pub const FLOAT_MAX_LEN: usize = 32;

/// A value that can be rendered into a `{}` placeholder.
///
/// Object safe, so heterogeneous arguments can be passed as
/// `&[&dyn FormatArg]`.
pub trait FormatArg {
    /// Longest output [`render`](FormatArg::render) produces, in bytes.
    fn max_len(&self) -> usize;

    /// Write the value's text.
    fn render(&self, out: &mut Writer<'_>);
}

/// An argument type whose output length has a compile-time bound.
///
/// A `char` counts as 4 bytes, the longest UTF-8 encoding of a codepoint,
/// not 1. A single `char` placeholder after 6 literal bytes therefore needs
/// a capacity of 11:
///
/// ```
/// use fixtext::format_auto;
///
/// let s = format_auto!("Char: {}" => (char,), 'A');
/// assert_eq!(s, "Char: A");
/// assert_eq!(s.capacity(), 11);
/// ```
pub trait BoundedArg: FormatArg {
    const MAX_LEN: usize;
}

impl<T: FormatArg + ?Sized> FormatArg for &T {
    #[inline]
    fn max_len(&self) -> usize {
        (**self).max_len()
    }

    #[inline]
    fn render(&self, out: &mut Writer<'_>) {
        (**self).render(out);
    }
}

impl<T: BoundedArg + ?Sized> BoundedArg for &T {
    const MAX_LEN: usize = T::MAX_LEN;
}

macro_rules! impl_integer {
    ($write:ident as $wide:ty; $($ty:ty => $max:expr),* $(,)?) => {
        $(
            impl FormatArg for $ty {
                #[inline]
                fn max_len(&self) -> usize {
                    $max
                }

                #[inline]
                fn render(&self, out: &mut Writer<'_>) {
                    num::$write(out, *self as $wide);
                }
            }

            impl BoundedArg for $ty {
                const MAX_LEN: usize = $max;
            }
        )*
    };
}

// Widths are the longest decimal rendering, sign included
impl_integer!(write_signed as i64;
    i8 => 4,
    i16 => 6,
    i32 => 11,
    i64 => 20,
    isize => 20,
);

impl_integer!(write_unsigned as u64;
    u8 => 3,
    u16 => 5,
    u32 => 10,
    u64 => 20,
    usize => 20,
);

impl FormatArg for bool {
    fn max_len(&self) -> usize {
        Self::MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        out.write_bytes(if *self { b"true" } else { b"false" });
    }
}

impl BoundedArg for bool {
    const MAX_LEN: usize = 5;
}

impl FormatArg for char {
    fn max_len(&self) -> usize {
        Self::MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        let mut tmp = [0u8; 4];
        out.write_bytes(self.encode_utf8(&mut tmp).as_bytes());
    }
}

impl BoundedArg for char {
    /// A `char` is one codepoint, up to four bytes of UTF-8.
    const MAX_LEN: usize = 4;
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl FormatArg for $ty {
                fn max_len(&self) -> usize {
                    FLOAT_MAX_LEN
                }

                fn render(&self, out: &mut Writer<'_>) {
                    let magnitude = if *self < 0.0 { -*self } else { *self };
                    // Plain notation outside this range can exceed FLOAT_MAX_LEN
                    let plain = !self.is_finite()
                        || *self == 0.0
                        || (1e-5..1e16).contains(&magnitude);
                    // Writer never fails; overflow is recorded as truncation
                    let _ = if plain {
                        write!(out, "{}", self)
                    } else {
                        write!(out, "{:e}", self)
                    };
                }
            }

            impl BoundedArg for $ty {
                const MAX_LEN: usize = FLOAT_MAX_LEN;
            }
        )*
    };
}

impl_float!(f32, f64);

impl FormatArg for str {
    fn max_len(&self) -> usize {
        TEXT_MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        out.write_bytes(self.as_bytes());
    }
}

impl BoundedArg for str {
    const MAX_LEN: usize = TEXT_MAX_LEN;
}

impl FormatArg for CStr {
    fn max_len(&self) -> usize {
        TEXT_MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        out.write_bytes(self.to_bytes());
    }
}

impl BoundedArg for CStr {
    const MAX_LEN: usize = TEXT_MAX_LEN;
}

impl FormatArg for StringView<'_> {
    fn max_len(&self) -> usize {
        TEXT_MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        out.write_bytes(self.as_bytes());
    }
}

impl BoundedArg for StringView<'_> {
    const MAX_LEN: usize = TEXT_MAX_LEN;
}

impl<const M: usize> FormatArg for FixedString<M> {
    fn max_len(&self) -> usize {
        Self::MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        out.write_bytes(self.as_bytes());
    }
}

impl<const M: usize> BoundedArg for FixedString<M> {
    const MAX_LEN: usize = M.saturating_sub(1);
}

#[cfg(feature = "heapless")]
impl<const M: usize> FormatArg for heapless::String<M> {
    fn max_len(&self) -> usize {
        M
    }

    fn render(&self, out: &mut Writer<'_>) {
        out.write_bytes(self.as_bytes());
    }
}

#[cfg(feature = "heapless")]
impl<const M: usize> BoundedArg for heapless::String<M> {
    const MAX_LEN: usize = M;
}

/// Renders an unsigned integer in hexadecimal, without prefix or padding.
///
/// ```
/// use fixtext::format::{format, Hex};
///
/// let s = format::<16, _>("0x{}", &(Hex::upper(0xBEEFu16),)).unwrap();
/// assert_eq!(s, "0xBEEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hex<T> {
    value: T,
    uppercase: bool,
}

impl<T: Into<u64> + Copy> Hex<T> {
    /// Lowercase digits.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            uppercase: false,
        }
    }

    /// Uppercase digits.
    #[inline]
    pub const fn upper(value: T) -> Self {
        Self {
            value,
            uppercase: true,
        }
    }
}

impl<T: Into<u64> + Copy> FormatArg for Hex<T> {
    fn max_len(&self) -> usize {
        Self::MAX_LEN
    }

    fn render(&self, out: &mut Writer<'_>) {
        num::write_hex(out, self.value.into(), self.uppercase);
    }
}

impl<T: Into<u64> + Copy> BoundedArg for Hex<T> {
    const MAX_LEN: usize = 16;
}

/// An ordered set of arguments.
///
/// Implemented for `[&dyn FormatArg]` (runtime lists, as built by the
/// macros) and for tuples of up to twelve [`FormatArg`] values.
pub trait ArgList {
    fn arg_count(&self) -> usize;

    /// The argument at `index`, or `None` past the end.
    fn arg(&self, index: usize) -> Option<&dyn FormatArg>;

    /// Sum of every argument's [`FormatArg::max_len`].
    fn max_len(&self) -> usize {
        (0..self.arg_count())
            .filter_map(|i| self.arg(i))
            .map(|arg| arg.max_len())
            .sum()
    }
}

impl ArgList for [&dyn FormatArg] {
    fn arg_count(&self) -> usize {
        self.len()
    }

    fn arg(&self, index: usize) -> Option<&dyn FormatArg> {
        self.get(index).copied()
    }
}

/// An argument tuple whose count and total width are known at compile time.
pub trait BoundedArgs: ArgList {
    const COUNT: usize;
    /// Sum of the members' [`BoundedArg::MAX_LEN`].
    const MAX_LEN: usize;
}

impl ArgList for () {
    fn arg_count(&self) -> usize {
        0
    }

    fn arg(&self, _index: usize) -> Option<&dyn FormatArg> {
        None
    }
}

impl BoundedArgs for () {
    const COUNT: usize = 0;
    const MAX_LEN: usize = 0;
}

macro_rules! impl_tuple {
    ($count:expr; $($name:ident . $idx:tt),+) => {
        impl<$($name: FormatArg),+> ArgList for ($($name,)+) {
            fn arg_count(&self) -> usize {
                $count
            }

            fn arg(&self, index: usize) -> Option<&dyn FormatArg> {
                match index {
                    $($idx => Some(&self.$idx),)+
                    _ => None,
                }
            }
        }

        impl<$($name: BoundedArg),+> BoundedArgs for ($($name,)+) {
            const COUNT: usize = $count;
            const MAX_LEN: usize = 0 $(+ <$name as BoundedArg>::MAX_LEN)+;
        }
    };
}

impl_tuple!(1; A.0);
impl_tuple!(2; A.0, B.1);
impl_tuple!(3; A.0, B.1, C.2);
impl_tuple!(4; A.0, B.1, C.2, D.3);
impl_tuple!(5; A.0, B.1, C.2, D.3, E.4);
impl_tuple!(6; A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple!(7; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple!(8; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_tuple!(9; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_tuple!(10; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_tuple!(11; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_tuple!(12; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(arg: &dyn FormatArg) -> ([u8; 64], usize) {
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        arg.render(&mut w);
        let len = w.finish();
        (buf, len)
    }

    fn rendered_len(arg: &dyn FormatArg) -> usize {
        render(arg).1
    }

    #[test]
    fn test_width_table() {
        assert_eq!(<i32 as BoundedArg>::MAX_LEN, 11);
        assert_eq!(<u32 as BoundedArg>::MAX_LEN, 10);
        assert_eq!(<bool as BoundedArg>::MAX_LEN, 5);
        assert_eq!(<f64 as BoundedArg>::MAX_LEN, FLOAT_MAX_LEN);
        assert_eq!(<&str as BoundedArg>::MAX_LEN, TEXT_MAX_LEN);
        assert_eq!(<StringView<'_> as BoundedArg>::MAX_LEN, TEXT_MAX_LEN);
        assert_eq!(<&CStr as BoundedArg>::MAX_LEN, TEXT_MAX_LEN);
        assert_eq!(<FixedString<16> as BoundedArg>::MAX_LEN, 15);
    }

    #[test]
    fn test_integer_extremes_fit_their_width() {
        assert_eq!(rendered_len(&i8::MIN), <i8 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&i16::MIN), <i16 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&i32::MIN), <i32 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&i64::MIN), <i64 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&u8::MAX), <u8 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&u16::MAX), <u16 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&u32::MAX), <u32 as BoundedArg>::MAX_LEN);
        assert_eq!(rendered_len(&u64::MAX), <u64 as BoundedArg>::MAX_LEN);
    }

    #[test]
    fn test_bool_and_char() {
        let (buf, len) = render(&false);
        assert_eq!(&buf[..len], b"false");
        let (buf, len) = render(&true);
        assert_eq!(&buf[..len], b"true");
        let (buf, len) = render(&'😀');
        assert_eq!(&buf[..len], "😀".as_bytes());
        assert_eq!(len, <char as BoundedArg>::MAX_LEN);
    }

    #[test]
    fn test_float_rendering() {
        let (buf, len) = render(&1.5f64);
        assert_eq!(&buf[..len], b"1.5");
        let (buf, len) = render(&0.0f32);
        assert_eq!(&buf[..len], b"0");
        let (buf, len) = render(&1e300f64);
        assert_eq!(&buf[..len], b"1e300");
        let (buf, len) = render(&f64::NAN);
        assert_eq!(&buf[..len], b"NaN");
        let (buf, len) = render(&f64::NEG_INFINITY);
        assert_eq!(&buf[..len], b"-inf");
    }

    #[test]
    fn test_float_worst_cases_fit() {
        for v in [
            f64::MIN,
            f64::MIN_POSITIVE,
            -f64::MIN_POSITIVE,
            -1.234_567_890_123_456_7e-300,
            -9_999_999_999_999_998.0,
            -0.000_012_345_678_901_234_57,
            f64::from(f32::MIN),
        ] {
            assert!(rendered_len(&v) <= FLOAT_MAX_LEN, "{v}");
        }
        assert!(rendered_len(&f32::MIN_POSITIVE) <= FLOAT_MAX_LEN);
    }

    #[test]
    fn test_text_arguments() {
        let (buf, len) = render(&"héllo");
        assert_eq!(&buf[..len], "héllo".as_bytes());
        let (buf, len) = render(&StringView::new("view"));
        assert_eq!(&buf[..len], b"view");
        let (buf, len) = render(&c"cstr");
        assert_eq!(&buf[..len], b"cstr");
        let s = FixedString::<8>::from_str_truncated("fixed");
        let (buf, len) = render(&s);
        assert_eq!(&buf[..len], b"fixed");
    }

    #[test]
    fn test_hex_argument() {
        let (buf, len) = render(&Hex::new(255u8));
        assert_eq!(&buf[..len], b"ff");
        let (buf, len) = render(&Hex::upper(0xABCDu32));
        assert_eq!(&buf[..len], b"ABCD");
        assert_eq!(rendered_len(&Hex::new(u64::MAX)), 16);
    }

    #[test]
    fn test_slice_arg_list() {
        let name = "x";
        let args: &[&dyn FormatArg] = &[&1i32, &name, &true];
        assert_eq!(args.arg_count(), 3);
        assert!(args.arg(2).is_some());
        assert!(args.arg(3).is_none());
        assert_eq!(ArgList::max_len(args), 11 + TEXT_MAX_LEN + 5);
    }

    #[test]
    fn test_tuple_arg_list() {
        let args = (1i32, 2u32, 'c');
        assert_eq!(args.arg_count(), 3);
        assert_eq!(<(i32, u32, char) as BoundedArgs>::COUNT, 3);
        assert_eq!(<(i32, u32, char) as BoundedArgs>::MAX_LEN, 11 + 10 + 4);
        assert_eq!(ArgList::max_len(&args), 25);
        assert!(args.arg(3).is_none());

        let (buf, len) = render(args.arg(1).unwrap());
        assert_eq!(&buf[..len], b"2");
        assert_eq!(<() as BoundedArgs>::MAX_LEN, 0);
    }
}
