//! String-to-number wrappers over the prefix scanners.
//!
//! Each conversion comes in two flavors: one that parses a leading prefix
//! and hands back the unconsumed tail, and an `_exact` form that succeeds
//! only when the whole string is the literal. The tail is a subslice of the
//! input, so the parsed value is always computed before anything else is
//! touched.

use crate::parse;

/// Parses the leading base-10 integer of `s` and returns it together with
/// the unconsumed tail.
///
/// `strtol` semantics: leading whitespace and an optional sign are part of
/// the literal; the value narrows from the 64-bit parse the way C narrows
/// `long` to `int`. If there is no valid integer prefix the value is 0 and
/// the tail is the entire input; a non-empty tail means trailing characters
/// were left unread, which is the caller's to check.
pub fn string_to_int(s: &str) -> (i32, &str) {
    let (value, consumed, _) = parse::parse_long(s.as_bytes(), 10);
    (value as i32, &s[consumed..])
}

/// Parses `s` as an integer, succeeding only if the entire string is
/// consumed.
///
/// Returns `Some(value)` when nothing is left over (note that this makes
/// `""` parse as `Some(0)`, since an empty parse leaves an empty tail), and
/// `None` otherwise. The partially-parsed value on failure is still
/// available through [`string_to_int`].
pub fn string_to_int_exact(s: &str) -> Option<i32> {
    let (value, tail) = string_to_int(s);
    tail.is_empty().then_some(value)
}

/// Parses the leading floating-point literal of `s` and returns it
/// together with the unconsumed tail.
///
/// `strtod` semantics: decimal and exponential notation, hexadecimal
/// floats, `inf`/`nan`, optional sign, leading whitespace skip. If there is
/// no valid prefix the value is 0.0 and the tail is the entire input.
pub fn string_to_double(s: &str) -> (f64, &str) {
    let (value, consumed) = parse::parse_double(s.as_bytes());
    (value, &s[consumed..])
}

/// Parses `s` as a floating-point number, succeeding only if the entire
/// string is consumed.
///
/// The floating-point counterpart of [`string_to_int_exact`].
pub fn string_to_double_exact(s: &str) -> Option<f64> {
    let (value, tail) = string_to_double(s);
    tail.is_empty().then_some(value)
}
