//! Whitespace trimming.

use crate::ctype;

/// Returns `s` with any leading whitespace run removed.
///
/// The result is a subslice of the input; all-whitespace input yields `""`.
pub fn trim_left(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut begin = 0;
    while begin < bytes.len() && ctype::is_space(bytes[begin]) {
        begin += 1;
    }
    &s[begin..]
}

/// Returns `s` with any trailing whitespace run removed.
///
/// The symmetric counterpart of [`trim_left`].
pub fn trim_right(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = bytes.len();
    while end > 0 && ctype::is_space(bytes[end - 1]) {
        end -= 1;
    }
    &s[..end]
}

/// Returns `s` with both leading and trailing whitespace removed.
pub fn trim(s: &str) -> &str {
    trim_right(trim_left(s))
}
