//! Recognition of the `inf`, `infinity` and `nan` keywords.

use crate::read::SliceRead;

pub(crate) enum Special {
    Infinity,
    Nan,
}

/// Consumes a special-value keyword at the front of `read`, matched without
/// regard to ASCII case.
///
/// `inf` extends to `infinity` when all eight letters are present. `nan`
/// extends over a parenthesized tag of ASCII alphanumerics and underscores,
/// as in `nan(payload_1)`; a malformed tag is not consumed. The tag does not
/// affect the value.
pub(crate) fn parse_special(read: &mut SliceRead) -> Option<Special> {
    let rest = read.remaining();
    let keyword = rest.get(..3)?;

    if keyword.eq_ignore_ascii_case(b"inf") {
        let len = match rest.get(..8) {
            Some(word) if word.eq_ignore_ascii_case(b"infinity") => 8,
            _ => 3,
        };
        read.skip(len);
        Some(Special::Infinity)
    } else if keyword.eq_ignore_ascii_case(b"nan") {
        read.skip(3 + nan_tag_len(&rest[3..]));
        Some(Special::Nan)
    } else {
        None
    }
}

/// Length of a `(n-char-sequence)` suffix at the start of `rest`, including
/// both parentheses, or 0 if there is none.
fn nan_tag_len(rest: &[u8]) -> usize {
    let body = match rest.split_first() {
        Some((&b'(', body)) => body,
        _ => return 0,
    };
    match memchr::memchr(b')', body) {
        Some(close) if body[..close].iter().all(|&ch| is_tag_char(ch)) => close + 2,
        _ => 0,
    }
}

fn is_tag_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}
