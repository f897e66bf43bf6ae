// The rounding and float layout code in this module is derived from the
// `lexical` crate by @Alexhuszagh, by way of serde_json's minimal float
// parser. Dual licensed as MIT and Apache 2.0 just like the rest of this
// crate, but copyright Alexander Huszagh.

//! Working magnitude for digit accumulation.
//!
//! Digits are folded into an [`ExtendedFloat`], which carries a 64-bit
//! significand against the 53 bits of `f64`, and narrowed to the target type
//! exactly once at the end of a parse.

mod float;
mod num;
mod rounding;

pub use self::float::ExtendedFloat;
pub(crate) use self::rounding::round_nearest_tie_even;
