//! Radix parameters for the mantissa grammar.

use crate::magnitude::ExtendedFloat;

/// Everything that differs between decimal and hexadecimal literals.
pub(crate) struct Radix {
    /// Base of the mantissa digits.
    pub base: u32,
    /// Lowercase exponent marker; the uppercase form is accepted too.
    pub marker: u8,
    /// Base the exponent is a power of. Exponent digits are always decimal.
    pub exponent_base: u32,
    /// `1 / base` as a working magnitude, the weight of the first fraction
    /// digit.
    pub reciprocal: ExtendedFloat,
}

pub(crate) static DECIMAL: Radix = Radix {
    base: 10,
    marker: b'e',
    exponent_base: 10,
    reciprocal: ExtendedFloat::ONE_TENTH,
};

pub(crate) static HEX: Radix = Radix {
    base: 16,
    marker: b'p',
    exponent_base: 2,
    reciprocal: ExtendedFloat::ONE_SIXTEENTH,
};

impl Radix {
    /// Value of `ch` as a digit in this radix.
    #[inline]
    pub fn to_digit(&self, ch: u8) -> Option<u32> {
        (ch as char).to_digit(self.base)
    }

    #[inline]
    pub fn is_marker(&self, ch: u8) -> bool {
        ch.to_ascii_lowercase() == self.marker
    }

    /// Multiplies `magnitude` by `exponent_base ^ exponent`.
    pub fn scale(&self, magnitude: ExtendedFloat, exponent: i32) -> ExtendedFloat {
        match self.exponent_base {
            2 => magnitude.mul_pow2(exponent),
            _ => magnitude.mul_pow10(exponent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(DECIMAL.to_digit(b'7'), Some(7));
        assert_eq!(DECIMAL.to_digit(b'a'), None);
        assert_eq!(HEX.to_digit(b'a'), Some(10));
        assert_eq!(HEX.to_digit(b'F'), Some(15));
        assert_eq!(HEX.to_digit(b'g'), None);
        assert_eq!(HEX.to_digit(b'.'), None);
    }

    #[test]
    fn markers() {
        assert!(DECIMAL.is_marker(b'e'));
        assert!(DECIMAL.is_marker(b'E'));
        assert!(!DECIMAL.is_marker(b'p'));
        assert!(HEX.is_marker(b'P'));
        assert!(!HEX.is_marker(b'e'));
    }

    #[test]
    fn scale() {
        let five = ExtendedFloat::from_u64(5);
        assert_eq!(DECIMAL.scale(five, 2), ExtendedFloat::from_u64(500));
        assert_eq!(HEX.scale(five, 2), ExtendedFloat::from_u64(20));
        assert_eq!(HEX.scale(five, -1).into_float::<f64>(), 2.5);
    }
}
