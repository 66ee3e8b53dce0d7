//! Case-insensitive string comparison.

use crate::ctype;

/// Compares two strings, ignoring ASCII case.
///
/// Works like C `strcmp`: each byte is folded through [`ctype::to_upper`]
/// before comparison, and if one string is a prefix of the other the shorter
/// one sorts first.
///
/// Returns `-1`, `0`, or `1`.
pub fn cmp_nocase(a: &str, b: &str) -> i32 {
    cmp_folded(a.as_bytes(), b.as_bytes(), ctype::to_upper)
}

/// Compares two strings, ignoring ASCII case and treating underscore and
/// hyphen as the same character.
///
/// Identical to [`cmp_nocase`] except that the fold maps `_` and `-` to a
/// common value, for names where the two separator styles are
/// interchangeable (so `"foo_bar"` and `"foo-bar"` compare equal).
///
/// Returns `-1`, `0`, or `1`.
pub fn cmp_nocase_uh(a: &str, b: &str) -> i32 {
    cmp_folded(a.as_bytes(), b.as_bytes(), ctype::to_upper_uh)
}

/// Lexicographic byte comparison under a fold, strcmp result convention.
fn cmp_folded(a: &[u8], b: &[u8], fold: fn(u8) -> u8) -> i32 {
    let n = a.len().min(b.len());
    for i in 0..n {
        let fa = fold(a[i]);
        let fb = fold(b[i]);
        if fa != fb {
            return if fa < fb { -1 } else { 1 };
        }
    }
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}
