//! Templates whose argument types are fixed where the template is defined.

use core::fmt;
use core::marker::PhantomData;

use super::arg::{ArgList, BoundedArgs};
use super::template::{analyze, FormatError, Template};
use crate::fixed_string::FixedString;
use crate::string_view::StringView;

/// A template checked against its argument tuple type `A`.
///
/// The placeholder count must equal `A::COUNT`, and rendering accepts only
/// a value of type `A`. Because every member of `A` has a bounded width,
/// [`capacity`](FormatString::capacity) is a constant: rendering into a
/// `FixedString<{ capacity }>` never truncates bounded arguments.
///
/// ```
/// use fixtext::format::FormatString;
///
/// const READING: FormatString<(u8, i32)> = FormatString::new("sensor {}: {}");
///
/// // 9 literal bytes + u8 (3) + i32 (11) + terminator
/// assert_eq!(READING.capacity(), 24);
///
/// let s = READING.format::<{ READING.capacity() }>((3, -40));
/// assert_eq!(s, "sensor 3: -40");
/// ```
///
/// A template that does not match its argument type fails to compile when
/// built in a const:
///
/// ```compile_fail
/// use fixtext::format::FormatString;
///
/// const BAD: FormatString<(i32,)> = FormatString::new("{} and {}");
/// let _ = BAD.arg_count();
/// ```
pub struct FormatString<A> {
    template: Template<'static>,
    _args: PhantomData<fn() -> A>,
}

impl<A: BoundedArgs> FormatString<A> {
    /// Number of placeholders, equal to the arity of `A`.
    pub const ARG_COUNT: usize = A::COUNT;

    /// Check `template` against `A`.
    ///
    /// # Panics
    ///
    /// Panics if the template is malformed or its placeholder count differs
    /// from the arity of `A`. In a `const` this is a compile error.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        match Self::try_new(template) {
            Ok(fs) => fs,
            Err(FormatError::UnexpectedOpenBrace { .. }) => {
                panic!("format template has an unmatched opening brace")
            }
            Err(FormatError::UnexpectedCloseBrace { .. }) => {
                panic!("format template has an unmatched closing brace")
            }
            Err(FormatError::ArgumentCount { .. }) => {
                panic!("format template placeholder count does not match its argument types")
            }
        }
    }

    /// Fallible form of [`new`](FormatString::new).
    ///
    /// # Errors
    ///
    /// Returns the parse error, or [`FormatError::ArgumentCount`] when the
    /// placeholder count differs from the arity of `A`.
    pub const fn try_new(template: &'static str) -> Result<Self, FormatError> {
        let parsed = match Template::parse(template) {
            Ok(parsed) => parsed,
            Err(e) => return Err(e),
        };
        if parsed.arg_count() != A::COUNT {
            return Err(FormatError::ArgumentCount {
                expected: parsed.arg_count(),
                supplied: A::COUNT,
            });
        }
        Ok(Self {
            template: parsed,
            _args: PhantomData,
        })
    }

    /// Storage needed to render any value of `A` without truncation,
    /// terminator included.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.template.required_capacity(A::MAX_LEN)
    }
}

impl<A> FormatString<A> {
    #[inline]
    #[must_use]
    pub const fn arg_count(&self) -> usize {
        self.template.arg_count()
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.template.as_str()
    }

    /// Template length in bytes, escapes counted as written.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.template.as_str().len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.template.as_str().is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn view(&self) -> StringView<'static> {
        StringView::new(self.template.as_str())
    }

    #[inline]
    #[must_use]
    pub const fn template(&self) -> Template<'static> {
        self.template
    }
}

impl<A: ArgList> FormatString<A> {
    /// Render `args` into a new `FixedString<N>`.
    ///
    /// Use `N = self.capacity()` to rule out truncation of bounded values.
    #[must_use]
    pub fn format<const N: usize>(&self, args: A) -> FixedString<N> {
        let mut out = FixedString::new();
        self.format_to(&mut out, args);
        out
    }

    /// Render `args` over the content of `out`.
    ///
    /// Returns `false` if the output was truncated.
    pub fn format_to<const N: usize>(&self, out: &mut FixedString<N>, args: A) -> bool {
        // Template and arity were checked at construction
        let complete = out.overwrite(|w| super::render(w, &self.template, &args));
        if !complete {
            trace!("typed render truncated at {} bytes", out.byte_length());
        }
        complete
    }
}

impl<A> Clone for FormatString<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for FormatString<A> {}

impl<A> fmt::Debug for FormatString<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FormatString")
            .field(&self.template.as_str())
            .finish()
    }
}

/// Capacity for rendering `template` with a value of the tuple type `A`.
///
/// Evaluated in a const by [`format_auto!`](crate::format_auto).
///
/// # Panics
///
/// Panics (a compile error in const context) if the template is malformed
/// or does not have exactly `A::COUNT` placeholders.
#[must_use]
pub const fn auto_capacity<A: BoundedArgs>(template: &str) -> usize {
    match analyze(template) {
        Ok(info) if info.arg_count == A::COUNT => info.literal_len + A::MAX_LEN + 1,
        Ok(_) => panic!("format template placeholder count does not match its arguments"),
        Err(_) => panic!("malformed format template"),
    }
}
