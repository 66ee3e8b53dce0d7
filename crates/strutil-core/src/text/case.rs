//! Byte-wise case conversion.

use crate::ctype;

/// Returns a new string with every ASCII letter lower-cased.
///
/// Byte-wise, C-locale behavior: non-ASCII bytes are left untouched. The
/// input is never mutated.
pub fn downcase(s: &str) -> String {
    map_ascii(s, ctype::to_lower)
}

/// Returns a new string with every ASCII letter upper-cased.
///
/// The counterpart of [`downcase`].
pub fn upcase(s: &str) -> String {
    map_ascii(s, ctype::to_upper)
}

/// Applies a byte-level map to the ASCII characters of `s`.
fn map_ascii(s: &str, map: fn(u8) -> u8) -> String {
    s.chars()
        .map(|ch| {
            if ch.is_ascii() {
                map(ch as u8) as char
            } else {
                ch
            }
        })
        .collect()
}
