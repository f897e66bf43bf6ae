// FLOAT TYPE

use super::num::*;
use super::rounding::*;

/// Extended precision floating-point type.
///
/// Unsigned, with a 64-bit significand: the value is `mant * 2^exp`. Every
/// operation returns a normalized result (the top bit of `mant` set) or zero.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedFloat {
    /// Mantissa for the extended-precision float.
    pub mant: u64,
    /// Binary exponent for the extended-precision float.
    pub exp: i32,
}

impl ExtendedFloat {
    // CONSTANTS

    pub const ZERO: ExtendedFloat = ExtendedFloat { mant: 0, exp: 0 };

    /// 10, exactly.
    pub const TEN: ExtendedFloat = ExtendedFloat {
        mant: 0xA000000000000000,
        exp: -60,
    };

    /// 1/10, rounded to nearest.
    pub const ONE_TENTH: ExtendedFloat = ExtendedFloat {
        mant: 0xCCCCCCCCCCCCCCCD,
        exp: -67,
    };

    /// 1/16, exactly.
    pub const ONE_SIXTEENTH: ExtendedFloat = ExtendedFloat {
        mant: 0x8000000000000000,
        exp: -67,
    };

    // PROPERTIES

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mant == 0
    }

    // FROM

    /// Create an exact extended float from an integer.
    #[inline]
    pub fn from_u64(value: u64) -> ExtendedFloat {
        let mut fp = ExtendedFloat { mant: value, exp: 0 };
        fp.normalize();
        fp
    }

    /// Round a 128-bit product or sum, scaled by `2^exp`, to 64 bits with
    /// ties to even.
    fn from_wide(wide: u128, exp: i32) -> ExtendedFloat {
        if wide == 0 {
            return ExtendedFloat::ZERO;
        }

        let bits = 128 - wide.leading_zeros() as i32;
        if bits <= 64 {
            let mut fp = ExtendedFloat {
                mant: wide as u64,
                exp,
            };
            fp.normalize();
            return fp;
        }

        let shift = bits - 64;
        let truncated = wide & ((1u128 << shift) - 1);
        let halfway = 1u128 << (shift - 1);
        let mut mant = wide >> shift;
        if truncated > halfway || (truncated == halfway && mant & 1 == 1) {
            mant += 1;
        }
        let mut exp = exp.saturating_add(shift);
        if mant >> 64 != 0 {
            // Rounded up into the next power of two.
            mant >>= 1;
            exp = exp.saturating_add(1);
        }
        ExtendedFloat {
            mant: mant as u64,
            exp,
        }
    }

    /// Create extended float from native float.
    #[inline]
    pub fn from_float<F: Float>(f: F) -> ExtendedFloat {
        let mut fp = ExtendedFloat {
            mant: f.mantissa().as_u64(),
            exp: f.exponent(),
        };
        fp.normalize();
        fp
    }

    // COMPARE

    /// Strict magnitude comparison, as if by `a > b`.
    pub fn exceeds(&self, b: &ExtendedFloat) -> bool {
        let mut a = *self;
        let mut b = *b;
        a.normalize();
        b.normalize();
        match (a.is_zero(), b.is_zero()) {
            (true, _) => false,
            (false, true) => true,
            (false, false) => (a.exp, a.mant) > (b.exp, b.mant),
        }
    }

    // OPERATIONS

    /// Multiply two extended-precision floats, as if by `a*b`.
    ///
    /// The full 128-bit product of the mantissas is rounded once.
    #[inline]
    pub fn mul(&self, b: &ExtendedFloat) -> ExtendedFloat {
        if self.is_zero() || b.is_zero() {
            return ExtendedFloat::ZERO;
        }
        let wide = self.mant as u128 * b.mant as u128;
        ExtendedFloat::from_wide(wide, self.exp.saturating_add(b.exp))
    }

    /// Multiply in-place, as if by `a*b`.
    #[inline]
    pub fn imul(&mut self, b: &ExtendedFloat) {
        *self = self.mul(b);
    }

    /// Multiply by a small integer such as a radix or a digit.
    #[inline]
    pub fn mul_small(&self, n: u32) -> ExtendedFloat {
        let wide = self.mant as u128 * n as u128;
        ExtendedFloat::from_wide(wide, self.exp)
    }

    /// Add two extended-precision floats, as if by `a+b`.
    ///
    /// The smaller operand is aligned to the larger one inside 128 bits.
    /// Bits shifted out of the bottom are kept as a sticky bit so that the
    /// final rounding sees them.
    pub fn add(&self, b: &ExtendedFloat) -> ExtendedFloat {
        if self.is_zero() {
            return *b;
        }
        if b.is_zero() {
            return *self;
        }
        let (hi, lo) = if self.exp >= b.exp { (self, b) } else { (b, self) };

        // One bit of headroom for the carry out of the addition.
        const HEADROOM: u32 = 63;
        let hi_wide = (hi.mant as u128) << HEADROOM;
        let diff = hi.exp as i64 - lo.exp as i64;
        let lo_wide = (lo.mant as u128) << HEADROOM;
        let lo_wide = if diff >= 127 {
            1
        } else {
            let shifted = lo_wide >> diff;
            let sticky = (shifted << diff) != lo_wide;
            shifted | sticky as u128
        };

        ExtendedFloat::from_wide(hi_wide + lo_wide, hi.exp.saturating_sub(HEADROOM as i32))
    }

    /// Scale by `2^n`. Exact.
    #[inline]
    pub fn mul_pow2(&self, n: i32) -> ExtendedFloat {
        if self.is_zero() {
            return *self;
        }
        ExtendedFloat {
            mant: self.mant,
            exp: self.exp.saturating_add(n),
        }
    }

    /// Scale by `10^n`, by square and multiply.
    ///
    /// Each step rounds once, so the relative error stays near
    /// `2 * log2(|n|) * 2^-64`.
    pub fn mul_pow10(&self, n: i32) -> ExtendedFloat {
        if self.is_zero() || n == 0 {
            return *self;
        }
        let mut factor = if n > 0 {
            ExtendedFloat::TEN
        } else {
            ExtendedFloat::ONE_TENTH
        };
        let mut n = n.unsigned_abs();
        let mut result = *self;
        loop {
            if n & 1 == 1 {
                result.imul(&factor);
            }
            n >>= 1;
            if n == 0 {
                return result;
            }
            factor = factor.mul(&factor);
        }
    }

    // NORMALIZE

    /// Normalize float-point number.
    ///
    /// Shift the mantissa so the number of leading zeros is 0, or the value
    /// itself is 0.
    ///
    /// Get the number of bits shifted.
    #[inline]
    pub fn normalize(&mut self) -> u32 {
        // Using the clz intrinsic via leading_zeros is way faster than
        // shifting 1 bit at a time. Zero the shift for a zero mantissa to
        // avoid an overflowing shift.
        let shift = if self.mant == 0 {
            0
        } else {
            self.mant.leading_zeros()
        };
        self.shift_left(shift);
        shift
    }

    // SHIFT

    /// Drop the low `shift` bits, keeping the value's scale. A shift of the
    /// full width leaves zero.
    #[inline]
    pub(crate) fn shift_right(&mut self, shift: u32) {
        debug_assert!(shift <= u64::BITS, "shift_right() overflow.");
        self.mant = self.mant.checked_shr(shift).unwrap_or(0);
        self.exp = self.exp.saturating_add(shift as i32);
    }

    #[inline]
    pub(crate) fn shift_left(&mut self, shift: u32) {
        debug_assert!(shift < u64::BITS, "shift_left() overflow.");
        self.mant <<= shift;
        self.exp = self.exp.saturating_sub(shift as i32);
    }

    // INTO

    /// Convert into default-rounded, lower-precision native float.
    ///
    /// Magnitudes past the largest finite value become infinity.
    #[inline]
    pub fn into_float<F: Float>(mut self) -> F {
        // Far outside any native range. Settle these before rounding so the
        // exponent arithmetic below cannot overflow.
        if !self.is_zero() {
            if self.exp > EXPONENT_CEILING {
                return F::from_bits(F::INFINITY_BITS);
            }
            if self.exp < -EXPONENT_CEILING {
                return F::ZERO;
            }
        }
        round_to_native::<F>(&mut self);
        into_float(self)
    }
}

/// Binary exponents beyond this are out of range for every target.
pub(crate) const EXPONENT_CEILING: i32 = 1 << 20;

// INTO FLOAT

// Export extended-precision float to native float.
//
// The extended-precision float must be in native float representation,
// with overflow/underflow appropriately handled.
#[inline]
fn into_float<F>(fp: ExtendedFloat) -> F
where
    F: Float,
{
    if fp.mant == 0 || fp.exp < F::DENORMAL_EXPONENT {
        // sub-denormal, underflow
        F::ZERO
    } else if fp.exp >= F::MAX_EXPONENT {
        // overflow
        F::from_bits(F::INFINITY_BITS)
    } else {
        // calculate the exp and fraction bits, and return a float from bits.
        let exp: u64 = if (fp.exp == F::DENORMAL_EXPONENT)
            && (fp.mant & F::HIDDEN_BIT_MASK.as_u64()) == 0
        {
            0
        } else {
            (fp.exp + F::EXPONENT_BIAS) as u64
        };
        let exp = exp << F::MANTISSA_SIZE;
        let mant = fp.mant & F::MANTISSA_MASK.as_u64();
        F::from_bits(F::Unsigned::as_cast(mant | exp))
    }
}
