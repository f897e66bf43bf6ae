#![allow(clippy::float_cmp, clippy::excessive_precision)]

use from_chars::{from_chars, from_slice, from_str, CharsFormat, Error, ErrorCode, FromChars};
use std::fmt::Debug;

const GENERAL: CharsFormat = CharsFormat::GENERAL;
const FIXED: CharsFormat = CharsFormat::FIXED;
const SCIENTIFIC: CharsFormat = CharsFormat::SCIENTIFIC;
const HEX: CharsFormat = CharsFormat::HEX;

trait Ulp: Copy + Debug + PartialEq {
    fn next_up(self) -> Self;
    fn next_down(self) -> Self;
}

macro_rules! impl_ulp {
    ($ty:ident) => {
        impl Ulp for $ty {
            fn next_up(self) -> Self {
                $ty::from_bits(self.to_bits().wrapping_add(1))
            }
            fn next_down(self) -> Self {
                $ty::from_bits(self.to_bits().wrapping_sub(1))
            }
        }
    };
}

impl_ulp!(f32);
impl_ulp!(f64);

/// Parses `input` and checks the value to within one ulp, along with the
/// match length.
fn test_parse_ok<F>(input: &str, format: CharsFormat, expected: F, len: usize)
where
    F: FromChars + Ulp,
{
    let (value, end) = match from_chars::<F>(input.as_bytes(), format) {
        Ok(ok) => ok,
        Err(err) => panic!("{:?} under {}: {:?}", input, format, err),
    };
    assert_eq!(end, len, "match length of {:?} under {}", input, format);
    assert!(
        value == expected || value.next_up() == expected || value.next_down() == expected,
        "{:?} under {}: expected {:?}, got {:?}",
        input,
        format,
        expected,
        value,
    );
}

fn test_parse_err<F>(input: &str, format: CharsFormat, code: ErrorCode, offset: usize)
where
    F: FromChars + Debug,
{
    match from_chars::<F>(input.as_bytes(), format) {
        Ok(ok) => panic!("{:?} under {}: expected error, got {:?}", input, format, ok),
        Err(err) => {
            assert_eq!(err.code(), code, "{:?} under {}", input, format);
            assert_eq!(err.offset(), offset, "{:?} under {}", input, format);
        }
    }
}

#[test]
fn test_parse_driver_table() {
    test_parse_ok::<f64>("5", GENERAL, 5.0, 1);
    test_parse_ok::<f64>("0x123", GENERAL, 0.0, 1);
    test_parse_err::<f32>("+1", GENERAL, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("5", SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
    test_parse_ok::<f32>("4E3", FIXED, 4.0, 1);
    test_parse_ok::<f64>("4E3", GENERAL, 4000.0, 3);
    test_parse_ok::<f64>(" \t3.1", GENERAL, 3.1, 5);
    test_parse_ok::<f32>("-2", GENERAL, -2.0, 2);
    test_parse_ok::<f64>("15e-5", GENERAL, 15e-5, 5);
    test_parse_ok::<f32>("-51.23P23", HEX, -680624128.0, 9);
    test_parse_ok::<f64>("f.4p+2a", HEX, 61.0, 6);
    test_parse_ok::<f64>("-InF", GENERAL, f64::NEG_INFINITY, 4);
    test_parse_ok::<f32>("INfInItY", GENERAL, f32::INFINITY, 8);
    test_parse_err::<f32>("51E200", GENERAL, ErrorCode::OutOfRange, 6);
    test_parse_err::<f64>("", GENERAL, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f32>("hello", GENERAL, ErrorCode::InvalidLiteral, 0);
    test_parse_ok::<f32>("4.5", GENERAL, 4.5, 3);
    test_parse_ok::<f32>("5E", GENERAL, 5.0, 1);
    test_parse_err::<f32>("5E", SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
    test_parse_ok::<f32>("3E+", GENERAL, 3.0, 1);
    test_parse_err::<f32>("3E+", SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
}

#[test]
fn test_parse_exact() {
    // Short literals land on the correctly rounded value, not just near it.
    for input in [
        "42", "1234567", "0.5", "0.25", "1.5", "2.5", "3.5", "123.75", "4096.125",
        "65536.0625", "0.1", "0.3", "3.1", "123.456", "12345.678", "0.000001",
    ] {
        let expected: f64 = input.parse().unwrap();
        assert_eq!(from_str::<f64>(input), Ok((expected, input.len())), "{:?}", input);
        let expected: f32 = input.parse().unwrap();
        assert_eq!(from_str::<f32>(input), Ok((expected, input.len())), "{:?}", input);
    }
}

#[test]
fn test_parse_nan() {
    for (input, len) in [
        ("Nan", 3),
        ("NAN(slk38_klj)", 14),
        ("nan(*)", 3),
        ("-nan", 4),
        ("nan()", 5),
    ] {
        let (value, end) = from_str::<f32>(input).unwrap();
        assert!(value.is_nan(), "{:?}", input);
        assert_eq!(end, len, "{:?}", input);
    }

    let (value, _) = from_str::<f64>("-nan(1)").unwrap();
    assert!(value.is_nan() && value.is_sign_negative());
}

#[test]
fn test_parse_fixed() {
    test_parse_ok::<f64>("0", FIXED, 0.0, 1);
    test_parse_ok::<f64>("12.", FIXED, 12.0, 3);
    test_parse_ok::<f64>("12.5e", FIXED, 12.5, 4);
    test_parse_ok::<f64>("0.000001", FIXED, 0.000001, 8);
    test_parse_ok::<f64>("123.456xyz", FIXED, 123.456, 7);
    test_parse_ok::<f64>("9007199254740993", FIXED, 9007199254740992.0, 16);
    test_parse_ok::<f32>("3.14159", FIXED, 3.14159, 7);
    test_parse_err::<f64>(".5", FIXED, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("-", FIXED, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("--1", FIXED, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("- 1", FIXED, ErrorCode::InvalidLiteral, 0);
}

#[test]
fn test_parse_scientific() {
    test_parse_ok::<f64>("1e22", SCIENTIFIC, 1e22, 4);
    test_parse_ok::<f64>("1E+23", SCIENTIFIC, 1e23, 5);
    test_parse_ok::<f64>("17e-3", SCIENTIFIC, 0.017, 5);
    test_parse_ok::<f64>("2.5e1!", SCIENTIFIC, 25.0, 5);
    test_parse_ok::<f64>("1e308", SCIENTIFIC, 1e308, 5);
    test_parse_ok::<f64>("1e-307", SCIENTIFIC, 1e-307, 6);
    test_parse_err::<f64>("1.5", SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("1e", SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("1e-", SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
}

#[test]
fn test_parse_hex() {
    test_parse_ok::<f64>("1p4", HEX, 16.0, 3);
    test_parse_ok::<f64>("A", HEX, 10.0, 1);
    test_parse_ok::<f64>("ff.8", HEX, 255.5, 4);
    test_parse_ok::<f64>("1P-1", HEX, 0.5, 4);
    test_parse_ok::<f64>("1.8p", HEX, 1.5, 3);
    test_parse_ok::<f64>("1e3", HEX, 0x1e3 as f64, 3);
    test_parse_ok::<f32>("1p-149", HEX, f32::from_bits(1), 6);
    test_parse_ok::<f64>("1p-1074", HEX, f64::from_bits(1), 7);
    test_parse_ok::<f64>("1.fffffffffffffp1023", HEX, f64::MAX, 20);
    test_parse_err::<f64>("1p1024", HEX, ErrorCode::OutOfRange, 6);
    test_parse_ok::<f64>("0x1p3", HEX, 0.0, 1);
    test_parse_err::<f64>("g", HEX, ErrorCode::InvalidLiteral, 0);

    // Hex digits are never consumed by the decimal scanner and vice versa.
    test_parse_ok::<f64>("1a", GENERAL, 1.0, 1);
    test_parse_ok::<f64>("1a", HEX | FIXED, 26.0, 2);

    // The fixed and scientific bits gate the `p` exponent as they gate `e`.
    test_parse_ok::<f64>("1p3", HEX | FIXED, 1.0, 1);
    test_parse_ok::<f64>("1p3", HEX | GENERAL, 8.0, 3);
    test_parse_ok::<f64>("1p3", HEX | SCIENTIFIC, 8.0, 3);
    test_parse_err::<f64>("1", HEX | SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("1p", HEX | SCIENTIFIC, ErrorCode::InvalidLiteral, 0);
}

#[test]
fn test_parse_range() {
    test_parse_ok::<f32>("3.4028234e38", GENERAL, f32::MAX, 12);
    test_parse_ok::<f64>("1.7976931348623157e308", GENERAL, f64::MAX, 22);

    // Above MAX but below the rounding threshold to infinity.
    test_parse_err::<f32>(
        "340282350000000000000000000000000000000",
        GENERAL,
        ErrorCode::OutOfRange,
        39,
    );
    test_parse_err::<f32>("3.4028235e38", GENERAL, ErrorCode::OutOfRange, 12);
    test_parse_err::<f64>("1.7976931348623158e308", GENERAL, ErrorCode::OutOfRange, 22);
    test_parse_err::<f64>("-1.7976931348623158e308", GENERAL, ErrorCode::OutOfRange, 23);
    test_parse_err::<f64>("1.fffffffffffff8p1023", HEX, ErrorCode::OutOfRange, 21);

    test_parse_err::<f32>("3.5e38", GENERAL, ErrorCode::OutOfRange, 6);
    test_parse_err::<f64>("-1e309", GENERAL, ErrorCode::OutOfRange, 6);
    test_parse_ok::<f64>("5e-324", GENERAL, f64::from_bits(1), 6);
    test_parse_ok::<f64>("1e-400", GENERAL, 0.0, 6);
    test_parse_ok::<f32>("1e-50", GENERAL, 0.0, 5);

    let (value, _) = from_str::<f64>("-1e-400").unwrap();
    assert!(value == 0.0 && value.is_sign_negative());
}

#[test]
fn test_whitespace_prefix() {
    let (bare, bare_len) = from_str::<f64>("3.1").unwrap();
    for prefix in [" ", "  ", "\t", "\n\r", "\x0B\x0C"] {
        let input = format!("{}3.1", prefix);
        let (value, len) = from_str::<f64>(&input).unwrap();
        assert_eq!(value, bare);
        assert_eq!(len, bare_len + prefix.len());
    }
    test_parse_err::<f64>("   ", GENERAL, ErrorCode::InvalidLiteral, 0);
    test_parse_err::<f64>("  -", GENERAL, ErrorCode::InvalidLiteral, 0);
}

#[test]
fn test_boundary_within_range() {
    // A range that ends in the middle of a literal stops there.
    let input = b"12345e10";
    assert_eq!(from_slice::<f64>(&input[..3]), Ok((123.0, 3)));
    assert_eq!(from_slice::<f64>(&input[..6]), Ok((12345.0, 5)));
    assert_eq!(from_slice::<f64>(&input[..7]), Ok((123450.0, 7)));
    assert_eq!(from_slice::<f64>(&input[..0]).map_err(|e| e.offset()), Err(0));
}

#[test]
fn test_idempotent() {
    let input = b"  -1.25e-3 tail";
    let first = from_slice::<f64>(input);
    for _ in 0..3 {
        assert_eq!(from_slice::<f64>(input), first);
    }
}

#[test]
fn test_trait_forwarding() {
    assert_eq!(
        <f32 as FromChars>::from_chars(b"2.5", GENERAL),
        from_chars::<f32>(b"2.5", GENERAL),
    );
    let err: Error = f64::from_chars(b"x", GENERAL).unwrap_err();
    assert!(err.is_invalid());
    assert_eq!(err.offset(), 0);
}
