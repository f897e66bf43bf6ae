//! Parse a floating point literal from a byte slice.

use crate::error::{Error, Result};
use crate::format::{CharsFormat, ExponentPolicy};
use crate::magnitude::ExtendedFloat;
use crate::radix::{self, Radix};
use crate::read::SliceRead;
use crate::special::{self, Special};

/// Largest decimal exponent applied as written. Anything past this is out of
/// range or zero for every target type however many digits the mantissa has.
const EXPONENT_LIMIT: i32 = 1 << 28;

/// A floating point type that can be parsed by [`from_chars`].
///
/// Implemented for `f32`, `f64` and [`Extended`](crate::Extended). This
/// trait is sealed and cannot be implemented for types outside of
/// `from_chars`.
pub trait FromChars: Sized + Copy + private::Sealed {
    /// Parse a value of this type from the front of `input`.
    ///
    /// Same as [`from_chars`]`::<Self>(input, format)`.
    fn from_chars(input: &[u8], format: CharsFormat) -> Result<(Self, usize)> {
        from_chars(input, format)
    }
}

// Not public API. The conversions the parser needs from a target type.
pub(crate) mod private {
    use crate::magnitude::ExtendedFloat;

    pub trait Sealed: Sized {
        fn infinity(negative: bool) -> Self;

        fn nan(negative: bool) -> Self;

        /// Narrows the unsigned working magnitude, or returns `None` if it
        /// exceeds the largest finite value of the type.
        fn from_magnitude(magnitude: ExtendedFloat, negative: bool) -> Option<Self>;
    }
}

macro_rules! impl_native {
    ($($ty:ident)*) => {$(
        impl private::Sealed for $ty {
            #[inline]
            fn infinity(negative: bool) -> Self {
                if negative {
                    -$ty::INFINITY
                } else {
                    $ty::INFINITY
                }
            }

            #[inline]
            fn nan(negative: bool) -> Self {
                if negative {
                    -$ty::NAN
                } else {
                    $ty::NAN
                }
            }

            #[inline]
            fn from_magnitude(magnitude: ExtendedFloat, negative: bool) -> Option<Self> {
                // Judged before narrowing: anything above MAX is out of
                // range even if it would round down to MAX.
                if magnitude.exceeds(&ExtendedFloat::from_float($ty::MAX)) {
                    return None;
                }
                let value: $ty = magnitude.into_float();
                if negative {
                    Some(-value)
                } else {
                    Some(value)
                }
            }
        }

        impl FromChars for $ty {}
    )*};
}

impl_native! { f32 f64 }

/// Parse a floating point literal from the front of `input`.
///
/// Leading whitespace is skipped. On success returns the value together with
/// the offset of the first byte after the literal; the rest of the input is
/// not looked at. The accepted shapes are controlled by `format`:
///
/// ```text
/// literal  = [ "-" ] ( special | mantissa [ exponent ] )
/// special  = "inf" | "infinity" | "nan" [ "(" { alnum | "_" } ")" ]
/// mantissa = digit { digit } [ "." { digit } ]
/// exponent = ( "e" | "p" ) [ "+" | "-" ] decimal-digit { decimal-digit }
/// ```
///
/// Digits are hexadecimal and the exponent marker is `p` (a power of two)
/// when `format` contains [`CharsFormat::HEX`]. There is no `0x` prefix and
/// no leading `+`. Keywords and markers match regardless of ASCII case.
///
/// # Errors
///
/// Fails with [`ErrorCode::InvalidLiteral`] and offset 0 if the input does
/// not start with a literal of the required shape. Fails with
/// [`ErrorCode::OutOfRange`] and the offset of the end of the literal if the
/// literal is too large in magnitude for `F`.
///
/// ```
/// use from_chars::{from_chars, CharsFormat, ErrorCode};
///
/// assert_eq!(from_chars::<f64>(b"f.4p+2a", CharsFormat::HEX), Ok((61.0, 6)));
/// assert_eq!(from_chars::<f64>(b"5E", CharsFormat::GENERAL), Ok((5.0, 1)));
///
/// let err = from_chars::<f64>(b"5E", CharsFormat::SCIENTIFIC).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::InvalidLiteral);
/// ```
///
/// [`ErrorCode::InvalidLiteral`]: crate::ErrorCode::InvalidLiteral
/// [`ErrorCode::OutOfRange`]: crate::ErrorCode::OutOfRange
pub fn from_chars<F>(input: &[u8], format: CharsFormat) -> Result<(F, usize)>
where
    F: FromChars,
{
    Parser::new(input, format).parse()
}

/// Parse a floating point literal from the front of a byte slice in the
/// general format, with an optional decimal exponent.
pub fn from_slice<F>(input: &[u8]) -> Result<(F, usize)>
where
    F: FromChars,
{
    from_chars(input, CharsFormat::GENERAL)
}

/// Parse a floating point literal from the front of a string in the general
/// format, with an optional decimal exponent.
///
/// ```
/// let (value, len) = from_chars::from_str::<f32>(" \t3.1").unwrap();
/// assert_eq!(value, 3.1);
/// assert_eq!(len, 5);
/// ```
pub fn from_str<F>(input: &str) -> Result<(F, usize)>
where
    F: FromChars,
{
    from_chars(input.as_bytes(), CharsFormat::GENERAL)
}

struct Parser<'a> {
    read: SliceRead<'a>,
    radix: &'static Radix,
    exponent: ExponentPolicy,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], format: CharsFormat) -> Self {
        Parser {
            read: SliceRead::new(input),
            radix: if format.is_hex() {
                &radix::HEX
            } else {
                &radix::DECIMAL
            },
            exponent: format.exponent_policy(),
        }
    }

    fn parse<F>(&mut self) -> Result<(F, usize)>
    where
        F: FromChars,
    {
        while self.read.next_if(is_space).is_some() {}
        if self.read.is_empty() {
            return Err(self.reject("empty input"));
        }

        let negative = self.read.next_if(|ch| ch == b'-').is_some();
        if self.read.is_empty() {
            return Err(self.reject("sign without digits"));
        }

        if let Some(special) = special::parse_special(&mut self.read) {
            let value = match special {
                Special::Infinity => F::infinity(negative),
                Special::Nan => F::nan(negative),
            };
            return Ok((value, self.read.byte_offset()));
        }

        let mantissa = self.parse_mantissa()?;
        let magnitude = self.parse_exponent(mantissa)?;
        let end = self.read.byte_offset();

        match F::from_magnitude(magnitude, negative) {
            Some(value) => Ok((value, end)),
            None => {
                trace!(offset = end, "float literal out of range");
                Err(Error::out_of_range(end))
            }
        }
    }

    /// Integer part, then an optional fraction.
    fn parse_mantissa(&mut self) -> Result<ExtendedFloat> {
        let base = self.radix.base;

        let mut result = match self.eat_digit() {
            Some(digit) => ExtendedFloat::from_u64(digit as u64),
            None => return Err(self.reject("expected digit")),
        };
        while let Some(digit) = self.eat_digit() {
            result = result
                .mul_small(base)
                .add(&ExtendedFloat::from_u64(digit as u64));
        }

        if self.read.next_if(|ch| ch == b'.').is_some() {
            let reciprocal = self.radix.reciprocal;
            let mut weight = reciprocal;
            while let Some(digit) = self.eat_digit() {
                result = result.add(&weight.mul_small(digit));
                weight.imul(&reciprocal);
            }
        }

        Ok(result)
    }

    fn parse_exponent(&mut self, mantissa: ExtendedFloat) -> Result<ExtendedFloat> {
        let required = match self.exponent {
            ExponentPolicy::Forbidden => return Ok(mantissa),
            ExponentPolicy::Optional => false,
            ExponentPolicy::Required => true,
        };

        let significand_end = self.read.byte_offset();
        match self.scan_exponent() {
            Some(exponent) => Ok(self.radix.scale(mantissa, exponent)),
            None if required => Err(self.reject("expected exponent")),
            None => {
                // Marker, sign and whatever followed stay unconsumed.
                self.read.rewind(significand_end);
                Ok(mantissa)
            }
        }
    }

    /// Marker, optional sign, at least one decimal digit. Returns `None`
    /// without restoring the position if any part is missing.
    fn scan_exponent(&mut self) -> Option<i32> {
        let radix = self.radix;
        self.read.next_if(|ch| radix.is_marker(ch))?;

        let negative = self.read.next_if(|ch| ch == b'+' || ch == b'-') == Some(b'-');

        let mut exponent = decimal_digit(self.read.next_if(|ch| ch.is_ascii_digit())?);
        while let Some(ch) = self.read.next_if(|ch| ch.is_ascii_digit()) {
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(decimal_digit(ch));
        }
        let exponent = exponent.min(EXPONENT_LIMIT);

        Some(if negative { -exponent } else { exponent })
    }

    #[inline]
    fn eat_digit(&mut self) -> Option<u32> {
        let digit = self.radix.to_digit(self.read.peek()?)?;
        self.read.discard();
        Some(digit)
    }

    #[cold]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn reject(&self, reason: &'static str) -> Error {
        trace!(offset = self.read.byte_offset(), reason, "invalid float literal");
        Error::invalid()
    }
}

/// Whitespace in the C locale, which unlike `u8::is_ascii_whitespace`
/// includes vertical tab.
fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

fn decimal_digit(ch: u8) -> i32 {
    (ch - b'0') as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str, format: CharsFormat) -> Result<(f64, usize)> {
        from_chars(input.as_bytes(), format)
    }

    #[test]
    fn whitespace() {
        assert!(is_space(b'\x0B'));
        assert!(!is_space(b'\0'));
        assert_eq!(parse(" \t\n\x0B\x0C\r1", CharsFormat::GENERAL), Ok((1.0, 7)));
        assert_eq!(parse(" \t ", CharsFormat::GENERAL), Err(Error::invalid()));
    }

    #[test]
    fn exponent_rollback() {
        assert_eq!(parse("7e", CharsFormat::GENERAL), Ok((7.0, 1)));
        assert_eq!(parse("7e+", CharsFormat::GENERAL), Ok((7.0, 1)));
        assert_eq!(parse("7e-x", CharsFormat::GENERAL), Ok((7.0, 1)));
        assert_eq!(parse("7.e1", CharsFormat::GENERAL), Ok((70.0, 4)));
        assert_eq!(parse("7.e", CharsFormat::GENERAL), Ok((7.0, 2)));
        assert_eq!(parse("7e+", CharsFormat::SCIENTIFIC), Err(Error::invalid()));
    }

    #[test]
    fn exponent_saturates() {
        assert_eq!(
            parse("1e99999999999999999999", CharsFormat::GENERAL),
            Err(Error::out_of_range(22))
        );
        assert_eq!(
            parse("1e-99999999999999999999", CharsFormat::GENERAL),
            Ok((0.0, 23))
        );
        assert_eq!(
            parse("0e99999999999999999999", CharsFormat::GENERAL),
            Ok((0.0, 22))
        );
    }

    #[test]
    fn sign_of_zero() {
        let (value, len) = parse("-0.0", CharsFormat::GENERAL).unwrap();
        assert_eq!(len, 4);
        assert!(value == 0.0 && value.is_sign_negative());
    }
}
