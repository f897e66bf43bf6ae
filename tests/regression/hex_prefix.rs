// There is no `0x` prefix: the `x` ends the literal after the leading zero,
// for the decimal and hexadecimal scanners alike.

use from_chars::{from_chars, CharsFormat, Extended};

#[test]
fn test() {
    assert_eq!(
        from_chars::<Extended>(b"0x123", CharsFormat::GENERAL),
        Ok((Extended::ZERO, 1))
    );
    assert_eq!(from_chars::<f64>(b"0x123", CharsFormat::HEX), Ok((0.0, 1)));
}
