//! Placeholder formatting into fixed-capacity strings.
//!
//! Templates are plain text with `{}` placeholders; `{{` and `}}` produce
//! literal braces. Arguments are substituted in order, each rendered by its
//! [`FormatArg`] implementation. Nothing allocates: output goes into a
//! [`FixedString`] and is truncated at a codepoint boundary when it does not
//! fit.
//!
//! Four ways to pick the output size:
//!
//! - explicit: [`format::<N>`](format) or [`format_fixed!`](crate::format_fixed)
//! - computed from the argument types: [`FormatString`] or
//!   [`format_auto!`](crate::format_auto)
//! - the caller's buffer: [`format_to`] or [`format_to!`](crate::format_to)
//! - [`DEFAULT_CAPACITY`]: [`format_default`] or
//!   [`format_default!`](crate::format_default)
//!
//! ```
//! use fixtext::format::format;
//!
//! let s = format::<64, _>("x={}, y={}, z={}", &(1, 2, 3)).unwrap();
//! assert_eq!(s, "x=1, y=2, z=3");
//! ```

mod arg;
mod macros;
mod num;
mod template;
mod typed;
mod writer;

pub use arg::{ArgList, BoundedArg, BoundedArgs, FormatArg, Hex, FLOAT_MAX_LEN, TEXT_MAX_LEN};
pub use template::{analyze, FormatError, Segment, Segments, Template, TemplateInfo};
pub use typed::{auto_capacity, FormatString};
pub use writer::Writer;

use crate::fixed_string::FixedString;

/// Capacity used by [`format_default`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Capacity that holds any `u64` in hex, terminator included.
pub const HEX_CAPACITY: usize = 17;

/// Render `template` with `args` into a new `FixedString<N>`.
///
/// Output that does not fit is truncated.
///
/// # Errors
///
/// Returns [`FormatError`] if the template is malformed or its placeholder
/// count differs from the number of arguments.
pub fn format<const N: usize, A>(template: &str, args: &A) -> Result<FixedString<N>, FormatError>
where
    A: ArgList + ?Sized,
{
    let mut out = FixedString::new();
    format_to(&mut out, template, args)?;
    Ok(out)
}

/// Render `template` with `args` over the content of `out`.
///
/// On error `out` is left empty.
///
/// # Errors
///
/// Same as [`format`].
pub fn format_to<const N: usize, A>(
    out: &mut FixedString<N>,
    template: &str,
    args: &A,
) -> Result<(), FormatError>
where
    A: ArgList + ?Sized,
{
    let parsed = match checked(template, args) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("format template rejected: {}", e);
            out.clear();
            return Err(e);
        }
    };

    if !out.overwrite(|w| render(w, &parsed, args)) {
        trace!("format output truncated at {} bytes", out.byte_length());
    }
    Ok(())
}

/// [`format`] with [`DEFAULT_CAPACITY`].
///
/// # Errors
///
/// Same as [`format`].
pub fn format_default<A>(
    template: &str,
    args: &A,
) -> Result<FixedString<DEFAULT_CAPACITY>, FormatError>
where
    A: ArgList + ?Sized,
{
    format(template, args)
}

/// Storage that holds `template` rendered with `args` at their maximum
/// widths, terminator included.
///
/// Runtime counterpart of [`FormatString::capacity`]. Text arguments count
/// as [`TEXT_MAX_LEN`] regardless of their actual length.
///
/// # Errors
///
/// Same as [`format`].
pub fn required_capacity<A>(template: &str, args: &A) -> Result<usize, FormatError>
where
    A: ArgList + ?Sized,
{
    let parsed = checked(template, args)?;
    Ok(parsed.required_capacity(args.max_len()))
}

/// Render `value` in hex digits, without prefix or padding.
///
/// ```
/// use fixtext::format::{format_hex, HEX_CAPACITY};
///
/// assert_eq!(format_hex::<HEX_CAPACITY>(255, false), "ff");
/// assert_eq!(format_hex::<HEX_CAPACITY>(0xC0FFEE, true), "C0FFEE");
/// ```
#[must_use]
pub fn format_hex<const N: usize>(value: u64, uppercase: bool) -> FixedString<N> {
    let mut out = FixedString::new();
    format_hex_to(&mut out, value, uppercase);
    out
}

/// [`format_hex`] with [`DEFAULT_CAPACITY`].
#[must_use]
pub fn format_hex_default(value: u64, uppercase: bool) -> FixedString<DEFAULT_CAPACITY> {
    format_hex(value, uppercase)
}

/// Render `value` in hex digits over the content of `out`.
///
/// Returns `false` if the digits were truncated.
pub fn format_hex_to<const N: usize>(
    out: &mut FixedString<N>,
    value: u64,
    uppercase: bool,
) -> bool {
    out.overwrite(|w| num::write_hex(w, value, uppercase))
}

/// Parse `template` and match its placeholders against `args`.
fn checked<'t, A>(template: &'t str, args: &A) -> Result<Template<'t>, FormatError>
where
    A: ArgList + ?Sized,
{
    let parsed = Template::parse(template)?;
    let supplied = args.arg_count();
    if parsed.arg_count() != supplied {
        return Err(FormatError::ArgumentCount {
            expected: parsed.arg_count(),
            supplied,
        });
    }
    Ok(parsed)
}

/// Write the segments of a checked template, stopping at the first
/// truncation.
pub(crate) fn render<A>(out: &mut Writer<'_>, template: &Template<'_>, args: &A)
where
    A: ArgList + ?Sized,
{
    let mut next = 0;
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => out.write_bytes(text.as_bytes()),
            Segment::Placeholder => {
                if let Some(arg) = args.arg(next) {
                    arg.render(out);
                }
                next += 1;
            }
        }
        if out.is_truncated() {
            break;
        }
    }
}
