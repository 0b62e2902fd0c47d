//! Call-site macros over the format functions.
//!
//! The argument list is written inline like `format_args!`. Every macro but
//! `format_to!` yields the `FixedString` itself; a rejected template yields
//! an empty string.

/// Render into an existing `FixedString`, replacing its content.
///
/// Evaluates to `Result<(), FormatError>`.
///
/// ```
/// use fixtext::{format_to, FixedString};
///
/// let mut line = FixedString::<32>::new();
/// format_to!(line, "{} of {}", 3, 10).unwrap();
/// assert_eq!(line, "3 of 10");
/// ```
#[macro_export]
macro_rules! format_to {
    ($out:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let args: &[&dyn $crate::format::FormatArg] = &[$(&$arg),*];
        $crate::format::format_to(&mut $out, $template, args)
    }};
}

/// Render into a new `FixedString<N>` with an explicit capacity.
///
/// ```
/// use fixtext::format_fixed;
///
/// let s = format_fixed!(64, "x={}, y={}, z={}", 1, 2, 3);
/// assert_eq!(s, "x=1, y=2, z=3");
/// ```
#[macro_export]
macro_rules! format_fixed {
    ($capacity:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let mut out = $crate::FixedString::<{ $capacity }>::new();
        let _ = $crate::format_to!(out, $template $(, $arg)*);
        out
    }};
}

/// Render into a new `FixedString<DEFAULT_CAPACITY>`.
///
/// ```
/// use fixtext::format_default;
///
/// let s = format_default!("{{Value: {}}}", 42);
/// assert_eq!(s, "{Value: 42}");
/// assert_eq!(s.capacity(), 256);
/// ```
#[macro_export]
macro_rules! format_default {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_fixed!($crate::format::DEFAULT_CAPACITY, $template $(, $arg)*)
    };
}

/// Render into a `FixedString` sized at compile time from the argument
/// types.
///
/// Two forms:
///
/// - `format_auto!("template" => (T1, T2, ...), a1, a2, ...)` states the
///   argument types next to a const template. The template is checked and
///   the capacity computed in a const, so a malformed template or a wrong
///   argument count fails to compile, as does an argument of another type.
/// - `format_auto!(TYPED, a1, a2, ...)` renders a const [`FormatString`].
///
/// Bounded argument types never truncate; text beyond
/// [`TEXT_MAX_LEN`](crate::format::TEXT_MAX_LEN) bytes may.
///
/// [`FormatString`]: crate::format::FormatString
///
/// ```
/// use fixtext::format::FormatString;
/// use fixtext::format_auto;
///
/// let s = format_auto!("Value: {}" => (i32,), i32::MIN);
/// assert_eq!(s, "Value: -2147483648");
/// assert_eq!(s.capacity(), 7 + 11 + 1);
///
/// const STATUS: FormatString<(bool, char)> = FormatString::new("ok={} mode={}");
/// let s = format_auto!(STATUS, true, 'A');
/// assert_eq!(s, "ok=true mode=A");
/// ```
///
/// ```compile_fail
/// use fixtext::format_auto;
///
/// // Two placeholders, one argument type
/// let s = format_auto!("{} {}" => (i32,), 1);
/// ```
#[macro_export]
macro_rules! format_auto {
    ($template:expr => ($($ty:ty),* $(,)?) $(, $arg:expr)* $(,)?) => {{
        const CAPACITY: usize = $crate::format::auto_capacity::<($($ty,)*)>($template);
        let args: ($($ty,)*) = ($($arg,)*);
        let mut out = $crate::FixedString::<CAPACITY>::new();
        // Checked by auto_capacity; cannot fail
        let _ = $crate::format::format_to(&mut out, $template, &args);
        out
    }};
    ($typed:path $(, $arg:expr)* $(,)?) => {
        $typed.format::<{ $typed.capacity() }>(($($arg,)*))
    };
}
