//! # from_chars
//!
//! Locale-independent, allocation-free conversion of a character sequence into
//! a floating point value.
//!
//! The parser reports exactly how many bytes of the input made up the literal,
//! and signals failure through a returned [`Error`] rather than panicking.
//! Callers choose which notations are legal through a [`CharsFormat`]:
//! fixed (`3.25`), scientific (`325e-2`), both (the default, "general"), or
//! hexadecimal floats (`1.ap+1`).
//!
//! ```
//! use from_chars::{from_chars, CharsFormat};
//!
//! # fn main() -> from_chars::Result<()> {
//! let (value, len) = from_chars::<f64>(b"  -15e2 rest", CharsFormat::GENERAL)?;
//! assert_eq!(value, -1500.0);
//! assert_eq!(len, 7);
//!
//! // Under `fixed` the exponent is left unconsumed.
//! let (value, len) = from_chars::<f32>(b"4E3", CharsFormat::FIXED)?;
//! assert_eq!((value, len), (4.0, 1));
//! # Ok(())
//! # }
//! ```
//!
//! # Failure
//!
//! An input that does not start with a literal of the requested shape fails
//! with [`ErrorCode::InvalidLiteral`] and an offset of zero: no bytes were
//! consumed. A well-formed literal whose magnitude does not fit the target
//! type fails with [`ErrorCode::OutOfRange`], and the offset still covers the
//! whole literal so that callers can skip past it.
//!
//! ```
//! use from_chars::{from_str, ErrorCode};
//!
//! let err = from_str::<f32>("51E200").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::OutOfRange);
//! assert_eq!(err.offset(), 6);
//!
//! let err = from_str::<f32>("+1").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidLiteral);
//! assert_eq!(err.offset(), 0);
//! ```
//!
//! # Target types
//!
//! [`f32`], [`f64`] and [`Extended`] implement [`FromChars`]. Digits are
//! always accumulated in a working magnitude with a 64-bit significand and
//! narrowed once, so the error does not grow with the length of the literal.

#![doc(html_root_url = "https://docs.rs/from_chars/0.1.0")]
// Ignored clippy lints
#![allow(
    // things are often more readable this way
    clippy::module_name_repetitions,
    // long masks read better without separators
    clippy::unreadable_literal,
    // integer and float conversions are checked by hand where it matters
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod error;
mod extended;
pub mod format;
mod magnitude;
mod parse;
mod radix;
mod read;
mod special;

#[doc(inline)]
pub use crate::error::{Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::extended::Extended;
#[doc(inline)]
pub use crate::format::{CharsFormat, ExponentPolicy, ParseFormatError};
#[doc(inline)]
pub use crate::parse::{from_chars, from_slice, from_str, FromChars};
