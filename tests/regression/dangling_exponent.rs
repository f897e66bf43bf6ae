// An exponent marker with a sign but no digits is not part of the literal.
// Under `general` the literal ends before the marker, under `scientific`
// nothing valid remains.

use from_chars::{from_chars, CharsFormat, ErrorCode};

#[test]
fn test() {
    assert_eq!(from_chars::<f32>(b"3E+", CharsFormat::GENERAL), Ok((3.0, 1)));
    assert_eq!(from_chars::<f32>(b"3E-", CharsFormat::GENERAL), Ok((3.0, 1)));
    assert_eq!(from_chars::<f64>(b"3p+", CharsFormat::HEX), Ok((3.0, 1)));

    let err = from_chars::<f32>(b"3E+", CharsFormat::SCIENTIFIC).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLiteral);
    assert_eq!(err.offset(), 0);
}
