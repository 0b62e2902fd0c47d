//! Error kinds shared with the device layer.

use core::fmt;

use crate::format::FormatError;

/// Error kind reported through [`Outcome`](crate::Outcome).
///
/// The discriminants are stable and fit in a byte so that codes can be
/// compared across firmware boundaries (see [`Error::as_u8`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[non_exhaustive]
pub enum Error {
    /// Peer or peripheral is not connected.
    NotConnected = 1,
    /// Operation did not complete in time.
    Timeout = 2,
    /// No room left in the destination buffer.
    BufferFull = 3,
    /// An argument was out of range or malformed.
    InvalidParameter = 4,
    ReadFailed = 5,
    WriteFailed = 6,
    FileNotFound = 7,
    /// A format template was malformed or did not match its arguments.
    InvalidFormat = 8,
    Unknown = 0xFF,
}

impl Error {
    /// Stable numeric code.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a numeric code produced by [`Error::as_u8`].
    #[must_use]
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::NotConnected),
            2 => Some(Self::Timeout),
            3 => Some(Self::BufferFull),
            4 => Some(Self::InvalidParameter),
            5 => Some(Self::ReadFailed),
            6 => Some(Self::WriteFailed),
            7 => Some(Self::FileNotFound),
            8 => Some(Self::InvalidFormat),
            0xFF => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Error {
    type Error = u8;

    /// Returns the unrecognised code on failure.
    fn try_from(code: u8) -> Result<Self, u8> {
        Self::from_u8(code).ok_or(code)
    }
}

impl From<Error> for u8 {
    fn from(error: Error) -> u8 {
        error.as_u8()
    }
}

impl From<FormatError> for Error {
    fn from(_: FormatError) -> Self {
        Self::InvalidFormat
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "not connected"),
            Self::Timeout => write!(f, "timeout"),
            Self::BufferFull => write!(f, "buffer full"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::ReadFailed => write!(f, "read failed"),
            Self::WriteFailed => write!(f, "write failed"),
            Self::FileNotFound => write!(f, "file not found"),
            Self::InvalidFormat => write!(f, "invalid format template"),
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        let all = [
            Error::NotConnected,
            Error::Timeout,
            Error::BufferFull,
            Error::InvalidParameter,
            Error::ReadFailed,
            Error::WriteFailed,
            Error::FileNotFound,
            Error::InvalidFormat,
            Error::Unknown,
        ];
        for e in all {
            assert_eq!(Error::try_from(e.as_u8()), Ok(e));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Error::try_from(0), Err(0));
        assert_eq!(Error::try_from(42), Err(42));
    }

    #[test]
    fn test_format_error_maps_to_invalid_format() {
        let e: Error = FormatError::UnexpectedCloseBrace { position: 3 }.into();
        assert_eq!(e, Error::InvalidFormat);
    }
}
