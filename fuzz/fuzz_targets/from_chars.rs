#![no_main]

use from_chars::{from_chars, CharsFormat, Extended, FromChars};
use libfuzzer_sys::fuzz_target;

fn check<F: FromChars>(data: &[u8], format: CharsFormat) {
    match from_chars::<F>(data, format) {
        Ok((_, len)) => assert!(0 < len && len <= data.len()),
        Err(err) if err.is_invalid() => assert_eq!(err.offset(), 0),
        Err(err) => assert!(0 < err.offset() && err.offset() <= data.len()),
    }
    // Nothing past the reported boundary was looked at.
    let first = from_chars::<F>(data, format).map(|(_, len)| len);
    if let Ok(len) = first {
        assert_eq!(from_chars::<F>(&data[..len], format).map(|(_, len)| len), first);
    }
}

fuzz_target!(|data: &[u8]| {
    let (&selector, data) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let format = CharsFormat::from_bits_truncate(selector);
    check::<f32>(data, format);
    check::<f64>(data, format);
    check::<Extended>(data, format);
});
