// A leading `+` is rejected, in the mantissa and before special values,
// even though `+` is accepted after an exponent marker.

use from_chars::from_str;

#[test]
fn test() {
    for input in ["+1", "+inf", "+nan", " +0.5", "hello"] {
        let err = from_str::<f32>(input).unwrap_err();
        assert!(err.is_invalid(), "{:?}", input);
        assert_eq!(err.offset(), 0, "{:?}", input);
    }
    assert_eq!(from_str::<f32>("1e+1"), Ok((10.0, 4)));
}
