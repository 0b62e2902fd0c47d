//! Tagged success/failure value used at device-call boundaries.

use core::ops::{Deref, DerefMut};

use crate::error::Error;

/// Holds exactly one of a success value `T` or an error code `E`.
///
/// Built only through [`Outcome::ok`] and [`Outcome::err`]. Reading the
/// value of an error (or the error of a success) is a contract violation
/// and panics; check [`is_ok`](Outcome::is_ok) first or use
/// [`value_or`](Outcome::value_or). Converts to and from
/// `core::result::Result` so `?` works after [`into_result`](Outcome::into_result).
///
/// # Example
///
/// ```
/// use fixtext::{Error, Outcome};
///
/// let reading: Outcome<i32> = Outcome::err(Error::Timeout);
/// assert!(reading.is_err());
/// assert_eq!(reading.value_or(99), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub struct Outcome<T, E = Error> {
    inner: Result<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// A success carrying `value`.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failure carrying `error`.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self { inner: Err(error) }
    }

    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// Same as [`is_ok`](Outcome::is_ok), for call sites that test an
    /// outcome as a flag.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        self.is_ok()
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics if this is an error.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn value(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(_) => panic!("Outcome::value called on an error"),
        }
    }

    /// Mutable access to the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is an error.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.inner {
            Ok(value) => value,
            Err(_) => panic!("Outcome::value_mut called on an error"),
        }
    }

    /// The error code.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn error(&self) -> &E {
        match &self.inner {
            Ok(_) => panic!("Outcome::error called on a success"),
            Err(error) => error,
        }
    }

    /// Consume and return the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is an error.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(_) => panic!("Outcome::into_value called on an error"),
        }
    }

    /// The success value, or `default` on error.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }

    #[inline]
    pub const fn as_result(&self) -> &Result<T, E> {
        &self.inner
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        Outcome {
            inner: self.inner.map(f),
        }
    }

    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Outcome<T, G> {
        Outcome {
            inner: self.inner.map_err(f),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(inner: Result<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.inner
    }
}

impl<T, E> Deref for Outcome<T, E> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if this is an error.
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T, E> DerefMut for Outcome<T, E> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}
