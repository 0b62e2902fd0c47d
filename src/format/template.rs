//! Placeholder template parsing.
//!
//! Grammar:
//!
//! ```text
//! template    := (literal | placeholder | escape)*
//! placeholder := "{}"
//! escape      := "{{" | "}}"
//! ```
//!
//! Any other `{` or `}` is rejected with the byte position of the offending
//! brace. Analysis is a `const fn` so templates can be checked at compile time.

use core::fmt;

/// Why a template could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// A `{` that starts neither `{}` nor `{{`.
    UnexpectedOpenBrace { position: usize },
    /// A `}` that is not part of `{}` or `}}`.
    UnexpectedCloseBrace { position: usize },
    /// Placeholder count and argument count differ.
    ArgumentCount { expected: usize, supplied: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedOpenBrace { position } => {
                write!(f, "unexpected '{{' at byte {position}")
            }
            Self::UnexpectedCloseBrace { position } => {
                write!(f, "unexpected '}}' at byte {position}")
            }
            Self::ArgumentCount { expected, supplied } => {
                write!(f, "template expects {expected} arguments, got {supplied}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// Lengths derived from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemplateInfo {
    /// Bytes of literal output, with each escape counted as one byte.
    pub literal_len: usize,
    /// Number of `{}` placeholders.
    pub arg_count: usize,
}

/// Validate `template` and measure it.
///
/// # Errors
///
/// Returns the position of the first brace that is neither an escape nor
/// part of a placeholder.
pub const fn analyze(template: &str) -> Result<TemplateInfo, FormatError> {
    let bytes = template.as_bytes();
    let mut literal_len = 0;
    let mut arg_count = 0;
    let mut i = 0;

    while i < bytes.len() {
        let next = if i + 1 < bytes.len() { bytes[i + 1] } else { 0 };
        match bytes[i] {
            b'{' if next == b'{' => {
                literal_len += 1;
                i += 2;
            }
            b'{' if next == b'}' => {
                arg_count += 1;
                i += 2;
            }
            b'{' => return Err(FormatError::UnexpectedOpenBrace { position: i }),
            b'}' if next == b'}' => {
                literal_len += 1;
                i += 2;
            }
            b'}' => return Err(FormatError::UnexpectedCloseBrace { position: i }),
            _ => {
                literal_len += 1;
                i += 1;
            }
        }
    }

    Ok(TemplateInfo {
        literal_len,
        arg_count,
    })
}

/// A validated template.
///
/// # Example
///
/// ```
/// use fixtext::format::{Segment, Template};
///
/// let t = Template::parse("{{x}}={}").unwrap();
/// assert_eq!(t.arg_count(), 1);
/// assert_eq!(t.literal_len(), 4);
///
/// let mut segments = t.segments();
/// assert_eq!(segments.next(), Some(Segment::Literal("{")));
/// assert_eq!(segments.next(), Some(Segment::Literal("x")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    text: &'a str,
    info: TemplateInfo,
}

impl<'a> Template<'a> {
    /// Validate `text`.
    ///
    /// # Errors
    ///
    /// See [`analyze`].
    pub const fn parse(text: &'a str) -> Result<Self, FormatError> {
        match analyze(text) {
            Ok(info) => Ok(Self { text, info }),
            Err(e) => Err(e),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    #[inline]
    #[must_use]
    pub const fn arg_count(&self) -> usize {
        self.info.arg_count
    }

    #[inline]
    #[must_use]
    pub const fn literal_len(&self) -> usize {
        self.info.literal_len
    }

    #[inline]
    #[must_use]
    pub const fn info(&self) -> TemplateInfo {
        self.info
    }

    /// Buffer size that holds this template rendered with arguments whose
    /// widths sum to `arg_widths`, terminator included.
    #[inline]
    #[must_use]
    pub const fn required_capacity(&self, arg_widths: usize) -> usize {
        self.info.literal_len + arg_widths + 1
    }

    /// Literal runs and placeholders in template order.
    pub fn segments(&self) -> Segments<'a> {
        Segments { rest: self.text }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output as is. An escape yields a one-byte literal.
    Literal(&'a str),
    /// A `{}` consuming the next argument.
    Placeholder,
}

/// Iterator over the [`Segment`]s of a [`Template`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let bytes = self.rest.as_bytes();
        let first = *bytes.first()?;

        let (segment, consumed) = match first {
            b'{' if bytes.get(1) == Some(&b'}') => (Segment::Placeholder, 2),
            b'{' | b'}' => (Segment::Literal(&self.rest[..1]), 2.min(bytes.len())),
            _ => {
                let end = bytes
                    .iter()
                    .position(|&b| b == b'{' || b == b'}')
                    .unwrap_or(bytes.len());
                (Segment::Literal(&self.rest[..end]), end)
            }
        };

        self.rest = &self.rest[consumed..];
        Some(segment)
    }
}
