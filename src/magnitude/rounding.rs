//! Rounding of the working magnitude to a native float layout.

use super::float::ExtendedFloat;
use super::num::*;

const BITS: u64 = u64::BITS as u64;

// MASKS

/// Bit `n` set, everything else clear.
#[inline]
fn nth_bit(n: u64) -> u64 {
    debug_assert!(n < BITS, "nth_bit() overflow in shl.");

    1 << n
}

/// Generate a bitwise mask for the lower `n` bits.
#[inline]
pub(crate) fn lower_n_mask(n: u64) -> u64 {
    debug_assert!(n <= BITS, "lower_n_mask() overflow in shl.");

    match n == BITS {
        true => u64::MAX,
        false => (1 << n) - 1,
    }
}

/// Calculate the halfway point for the lower `n` bits.
#[inline]
pub(crate) fn lower_n_halfway(n: u64) -> u64 {
    debug_assert!(n <= BITS, "lower_n_halfway() overflow in shl.");

    match n == 0 {
        true => 0,
        false => nth_bit(n - 1),
    }
}

/// Calculate a bitwise mask with `n` 1 bits starting at the `bit` position.
#[inline]
fn internal_n_mask(bit: u64, n: u64) -> u64 {
    debug_assert!(bit <= BITS, "internal_n_mask() overflow in shl.");
    debug_assert!(n <= BITS, "internal_n_mask() overflow in shl.");
    debug_assert!(bit >= n, "internal_n_mask() overflow in sub.");

    lower_n_mask(bit) ^ lower_n_mask(bit - n)
}

// NEAREST ROUNDING

// Shift right `shift` bits and report whether the dropped bits were above
// or exactly at the halfway point.
#[inline]
pub(crate) fn round_nearest(fp: &mut ExtendedFloat, shift: i32) -> (bool, bool) {
    // For 4 truncated bits the mask is b1111 and the halfway point b1000.
    let mask: u64 = lower_n_mask(shift as u64);
    let halfway: u64 = lower_n_halfway(shift as u64);

    let truncated_bits = fp.mant & mask;
    let is_above = truncated_bits > halfway;
    let is_halfway = truncated_bits == halfway;

    fp.shift_right(shift as u32);

    (is_above, is_halfway)
}

// Round up when above halfway, or at halfway with an odd last bit.
#[inline]
pub(crate) fn tie_even(fp: &mut ExtendedFloat, is_above: bool, is_halfway: bool) {
    let is_odd = fp.mant & 1 == 1;

    if is_above || (is_odd && is_halfway) {
        fp.mant += 1;
    }
}

// Shift right `shift` bits, rounding to nearest with ties to even.
#[inline]
pub(crate) fn round_nearest_tie_even(fp: &mut ExtendedFloat, shift: i32) {
    let (is_above, is_halfway) = round_nearest(fp, shift);
    tie_even(fp, is_above, is_halfway);
}

// ROUND TO FLOAT

// Shift the normalized fraction down to the width of the native significand,
// denormalizing as needed.
#[inline]
fn round_to_float<F>(fp: &mut ExtendedFloat)
where
    F: Float,
{
    let final_exp = fp.exp.saturating_add(F::DEFAULT_SHIFT);
    if final_exp < F::DENORMAL_EXPONENT {
        // Denormal result. Shift right only as far as keeps some bits, since
        // past 64 bits the value is certainly zero.
        let diff = F::DENORMAL_EXPONENT - fp.exp;
        if diff <= BITS as i32 {
            round_nearest_tie_even(fp, diff);
        } else {
            fp.mant = 0;
            fp.exp = 0;
        }
    } else {
        round_nearest_tie_even(fp, F::DEFAULT_SHIFT);
    }

    if fp.mant & F::CARRY_MASK == F::CARRY_MASK {
        // Roundup carried over to 1 past the hidden bit.
        fp.shift_right(1);
    }
}

// AVOID OVERFLOW

// A value just past the largest exponent may still fit once its leading bit
// is moved into the hidden bit.
#[inline]
fn avoid_overflow<F>(fp: &mut ExtendedFloat)
where
    F: Float,
{
    if fp.exp >= F::MAX_EXPONENT {
        let diff = fp.exp - F::MAX_EXPONENT;
        if diff <= F::MANTISSA_SIZE {
            // Mask starting at the hidden bit with `diff + 1` bits set.
            let bit = (F::MANTISSA_SIZE + 1) as u64;
            let n = (diff + 1) as u64;
            let mask = internal_n_mask(bit, n);
            if (fp.mant & mask) == 0 {
                let shift = diff + 1;
                fp.shift_left(shift as u32);
            }
        }
    }
}

// ROUND TO NATIVE

// Round an extended-precision float to a native float representation.
#[inline]
pub(crate) fn round_to_native<F>(fp: &mut ExtendedFloat)
where
    F: Float,
{
    // The right shifts below assume a normalized value.
    fp.normalize();

    round_to_float::<F>(fp);
    avoid_overflow::<F>(fp);
}
