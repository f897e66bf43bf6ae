// A nan tag with a character outside [A-Za-z0-9_] is left unconsumed, and
// the match ends right after `nan`.

use from_chars::from_str;

#[test]
fn test() {
    let (value, len) = from_str::<f32>("nan(*)").unwrap();
    assert!(value.is_nan());
    assert_eq!(len, 3);

    let (value, len) = from_str::<f64>("NAN(slk38_klj)").unwrap();
    assert!(value.is_nan());
    assert_eq!(len, 14);

    let (_, len) = from_str::<f64>("nan(unterminated").unwrap();
    assert_eq!(len, 3);
}
