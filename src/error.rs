//! When parsing a floating point literal goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::io;

/// This type represents the two ways a call to [`from_chars`] can fail.
///
/// Unlike most parse errors this one is `Copy` and carries no allocation: it
/// is the status code together with the boundary offset the parser reported.
///
/// [`from_chars`]: crate::from_chars
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    code: ErrorCode,
    offset: usize,
}

/// Alias for a `Result` with the error type `from_chars::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Byte offset of the first character not consumed by the parser.
    ///
    /// This is always `0` for [`ErrorCode::InvalidLiteral`]: callers must not
    /// assume any characters were consumed. For [`ErrorCode::OutOfRange`] it
    /// is the end of the well-formed literal, so the literal can be skipped.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the input did not start with a literal of the
    /// requested shape.
    pub fn is_invalid(&self) -> bool {
        self.code == ErrorCode::InvalidLiteral
    }

    /// Returns true if the literal was well formed but its magnitude does not
    /// fit the target type.
    pub fn is_out_of_range(&self) -> bool {
        self.code == ErrorCode::OutOfRange
    }

    #[cold]
    pub(crate) fn invalid() -> Self {
        Error {
            code: ErrorCode::InvalidLiteral,
            offset: 0,
        }
    }

    #[cold]
    pub(crate) fn out_of_range(offset: usize) -> Self {
        Error {
            code: ErrorCode::OutOfRange,
            offset,
        }
    }
}

/// This type describes the status of a failed parse.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ErrorCode {
    /// The input does not begin with a literal allowed by the requested
    /// format: it is empty, all whitespace, a lone sign, has no digits, or
    /// lacks a mandatory exponent.
    InvalidLiteral,

    /// The literal is well formed but its magnitude exceeds the largest
    /// finite value of the target type.
    OutOfRange,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidLiteral => f.write_str("invalid literal"),
            ErrorCode::OutOfRange => f.write_str("value out of range"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::InvalidLiteral => Display::fmt(&self.code, f),
            ErrorCode::OutOfRange => write!(f, "{} at offset {}", self.code, self.offset),
        }
    }
}

// Keep the debug representation flat. Humans often end up seeing this
// representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, offset: {})", self.code, self.offset)
    }
}

impl serde_core::de::StdError for Error {}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `from_chars::Error` into an `io::Error`.
    ///
    /// Both kinds of failure describe bad input, so they become
    /// `InvalidData` IO errors.
    ///
    /// ```
    /// use std::io;
    ///
    /// fn read_ratio(field: &str) -> io::Result<f64> {
    ///     let (value, _) = from_chars::from_str::<f64>(field)?;
    ///     Ok(value)
    /// }
    ///
    /// let err = read_ratio("ratio").unwrap_err();
    /// assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    /// ```
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
