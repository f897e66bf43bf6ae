use crate::magnitude::{round_nearest_tie_even, ExtendedFloat};
use crate::parse::{private, FromChars};
use core::fmt::{self, Debug};
use core::ops::Neg;

/// Extended precision floating point value.
///
/// Has the precision and range of the x87 80-bit `long double`: a 64-bit
/// significand, finite magnitudes below 2^16384, and gradual underflow down
/// to 2^-16445. Parse one with [`from_chars`](crate::from_chars) like any
/// other float:
///
/// ```
/// use from_chars::Extended;
///
/// // Beyond f64 but within the extended range.
/// let (value, _) = from_chars::from_str::<Extended>("1e400").unwrap();
/// assert!(value.is_finite());
/// assert!(value.to_f64().is_infinite());
///
/// // Every u64 is exact.
/// let (value, _) = from_chars::from_str::<Extended>("18446744073709551615").unwrap();
/// assert_eq!(value.mantissa(), u64::MAX);
/// assert_eq!(value.exponent(), 0);
/// ```
#[derive(Copy, Clone)]
pub struct Extended {
    negative: bool,
    class: Class,
}

#[derive(Copy, Clone, PartialEq)]
enum Class {
    /// Normalized, except below the smallest normal exponent where the
    /// significand is denormalized instead. Zero has `mant == 0`.
    Finite(ExtendedFloat),
    Infinite,
    Nan,
}

/// Binary exponent of the least significant bit of a denormal.
const DENORMAL_EXPONENT: i32 = -16445;
/// Largest binary exponent of the least significant bit of a finite value.
const MAX_EXPONENT: i32 = 16320;

impl Extended {
    /// Positive zero.
    pub const ZERO: Extended = Extended {
        negative: false,
        class: Class::Finite(ExtendedFloat::ZERO),
    };

    /// Positive infinity.
    pub const INFINITY: Extended = Extended {
        negative: false,
        class: Class::Infinite,
    };

    /// Negative infinity.
    pub const NEG_INFINITY: Extended = Extended {
        negative: true,
        class: Class::Infinite,
    };

    /// Not a number.
    pub const NAN: Extended = Extended {
        negative: false,
        class: Class::Nan,
    };

    /// Returns true if this value is NaN.
    pub fn is_nan(self) -> bool {
        self.class == Class::Nan
    }

    /// Returns true if this value is positive or negative infinity.
    pub fn is_infinite(self) -> bool {
        self.class == Class::Infinite
    }

    /// Returns true if this value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        matches!(self.class, Class::Finite(_))
    }

    /// Returns true if the sign bit is set, including for `-0` and negative
    /// NaN.
    pub fn is_sign_negative(self) -> bool {
        self.negative
    }

    /// Returns true if the sign bit is clear.
    pub fn is_sign_positive(self) -> bool {
        !self.negative
    }

    /// The 64-bit significand of a finite value, so that its magnitude is
    /// `mantissa * 2^exponent`. Zero for zero, infinity and NaN.
    pub fn mantissa(self) -> u64 {
        match self.class {
            Class::Finite(fp) => fp.mant,
            Class::Infinite | Class::Nan => 0,
        }
    }

    /// The binary exponent of the least significant bit of the significand.
    /// Zero for zero, infinity and NaN.
    pub fn exponent(self) -> i32 {
        match self.class {
            Class::Finite(fp) if fp.mant != 0 => fp.exp,
            _ => 0,
        }
    }

    /// Round to the nearest `f64`, ties to even. Magnitudes beyond `f64::MAX`
    /// become infinite.
    pub fn to_f64(self) -> f64 {
        let magnitude = match self.class {
            Class::Finite(fp) => fp.into_float::<f64>(),
            Class::Infinite => f64::INFINITY,
            Class::Nan => f64::NAN,
        };
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    fn from_native(value: f64) -> Self {
        let class = if value.is_nan() {
            Class::Nan
        } else if value.is_infinite() {
            Class::Infinite
        } else {
            // The decomposition ignores the sign bit.
            Class::Finite(ExtendedFloat::from_float(value))
        };
        Extended {
            negative: value.is_sign_negative(),
            class,
        }
    }
}

impl private::Sealed for Extended {
    fn infinity(negative: bool) -> Self {
        Extended {
            negative,
            class: Class::Infinite,
        }
    }

    fn nan(negative: bool) -> Self {
        Extended {
            negative,
            class: Class::Nan,
        }
    }

    fn from_magnitude(mut magnitude: ExtendedFloat, negative: bool) -> Option<Self> {
        magnitude.normalize();
        if magnitude.mant != 0 {
            if magnitude.exp > MAX_EXPONENT {
                return None;
            }
            if magnitude.exp < DENORMAL_EXPONENT {
                let shift = DENORMAL_EXPONENT as i64 - magnitude.exp as i64;
                if shift > 64 {
                    magnitude = ExtendedFloat::ZERO;
                } else {
                    // Cannot carry out of the top: the shift is at least one.
                    round_nearest_tie_even(&mut magnitude, shift as i32);
                    if magnitude.mant == 0 {
                        magnitude = ExtendedFloat::ZERO;
                    }
                }
            }
        }
        Some(Extended {
            negative,
            class: Class::Finite(magnitude),
        })
    }
}

impl FromChars for Extended {}

impl From<f64> for Extended {
    fn from(value: f64) -> Self {
        Extended::from_native(value)
    }
}

impl From<f32> for Extended {
    fn from(value: f32) -> Self {
        Extended::from_native(value as f64)
    }
}

impl Neg for Extended {
    type Output = Extended;

    fn neg(self) -> Extended {
        Extended {
            negative: !self.negative,
            class: self.class,
        }
    }
}

impl Default for Extended {
    fn default() -> Self {
        Extended::ZERO
    }
}

/// IEEE 754 equality: NaN is unequal to everything including itself, and
/// the two zeros are equal.
impl PartialEq for Extended {
    fn eq(&self, other: &Extended) -> bool {
        match (self.class, other.class) {
            (Class::Nan, _) | (_, Class::Nan) => false,
            (Class::Finite(a), Class::Finite(b)) if a.mant == 0 && b.mant == 0 => true,
            (a, b) => self.negative == other.negative && a == b,
        }
    }
}

impl Debug for Extended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match self.class {
            Class::Finite(fp) if fp.mant == 0 => write!(f, "{}0", sign),
            Class::Finite(fp) => write!(f, "{}{:#x}p{}", sign, fp.mant, fp.exp),
            Class::Infinite => write!(f, "{}inf", sign),
            Class::Nan => write!(f, "{}NaN", sign),
        }
    }
}
