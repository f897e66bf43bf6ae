#![no_std]

pub use from_chars::*;

pub fn parse_general(input: &[u8]) -> Result<(f64, usize)> {
    from_chars(input, CharsFormat::GENERAL)
}
