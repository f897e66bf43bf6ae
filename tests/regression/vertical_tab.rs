// Leading whitespace follows the C locale, which includes vertical tab.

use from_chars::from_str;

#[test]
fn test() {
    assert_eq!(from_str::<f64>("\x0B15e-5"), Ok((15e-5, 6)));
    assert_eq!(from_str::<f64>("\x0C\x0B-2"), Ok((-2.0, 4)));
}
