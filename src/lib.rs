//! Fixed-capacity text and containers with a no-alloc placeholder formatter.
//!
//! Everything here lives on the stack or in statics, sized by const
//! generics, for firmware that cannot use a heap:
//!
//! - **Views**: borrowed, never owning
//!   - [`Span`] - clamping view over a slice
//!   - [`StringView`] - UTF-8 aware byte view
//!
//! - **Containers**: inline storage of a fixed size
//!   - [`FixedBuffer`] - up to `N` bytes, `append` reports when full
//!   - [`FixedString`] - NUL-terminated text in `N` bytes
//!
//! - **Results**: device-call outcomes
//!   - [`Error`] - error kinds with stable `u8` codes
//!   - [`Outcome`] - value or error code
//!
//! - **Formatting**: `{}` templates rendered into a [`FixedString`]
//!   - [`format()`](format::format), [`format_to()`](format::format_to),
//!     [`format_default()`](format::format_default)
//!   - [`FormatString`] - template typed by its arguments, with a
//!     compile-time capacity
//!   - [`format_fixed!`], [`format_to!`], [`format_default!`],
//!     [`format_auto!`]
//!   - [`format_hex()`](format::format_hex) - hexadecimal digits
//!
//! # Template Format
//!
//! ```text
//! Hello, {}!     placeholder, replaced by the next argument
//! {{ and }}      literal braces
//! ```
//!
//! Any other brace is an error. Output that does not fit is cut at a
//! codepoint boundary and always NUL terminated.
//!
//! # Examples
//!
//! ## Explicit capacity
//!
//! ```
//! use fixtext::format_fixed;
//!
//! let s = format_fixed!(64, "x={}, y={}, z={}", 1, 2, 3);
//! assert_eq!(s, "x=1, y=2, z=3");
//! assert_eq!(s.c_str().to_bytes(), b"x=1, y=2, z=3");
//! ```
//!
//! ## Capacity from the argument types
//!
//! ```
//! use fixtext::format::FormatString;
//!
//! const TEMP: FormatString<(i32, char)> = FormatString::new("temp={}{}");
//!
//! let s = TEMP.format::<{ TEMP.capacity() }>((-12, 'C'));
//! assert_eq!(s, "temp=-12C");
//! ```
//!
//! ## Into an existing buffer
//!
//! ```
//! use fixtext::{format_to, FixedString};
//!
//! let mut out = FixedString::<8>::new();
//! format_to!(out, "Hello, {}!", "World").unwrap();
//! assert_eq!(out, "Hello, ");
//! ```
//!
//! # Features
//!
//! - `std` - `std::error::Error` impls
//! - `defmt` - `defmt::Format` impls and defmt logging
//! - `log` - logging through the `log` facade
//! - `heapless` - conversions to `heapless` collections
//! - `embedded-io` - `write_to` on the containers
//!
//! # No-std Support
//!
//! This crate is `no_std` by default and never allocates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod error;
pub mod fixed_buffer;
pub mod fixed_string;
pub mod format;
pub mod result;
pub mod span;
pub mod string_view;
pub mod utf8;

pub use error::Error;
pub use fixed_buffer::FixedBuffer;
pub use fixed_string::FixedString;
pub use format::{FormatArg, FormatError, FormatString, Hex};
pub use result::Outcome;
pub use span::Span;
pub use string_view::StringView;
