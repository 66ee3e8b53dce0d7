//! Integer prefix parsing (strtol semantics).

use crate::ctype;

/// Outcome of an integer prefix parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    Success,
    Overflow,
    Underflow,
    InvalidBase,
}

/// Parses the longest valid leading integer literal of `s`.
///
/// Equivalent to C `strtol`: skips leading whitespace, accepts an optional
/// sign, and in base 0 auto-detects `0x`/`0X` (hex), a leading `0` (octal),
/// or decimal. In base 16 an optional `0x`/`0X` prefix is accepted. Values
/// outside the `i64` range clamp to `i64::MAX`/`i64::MIN` while still
/// consuming the remaining digits.
///
/// Returns `(value, consumed, status)` where `consumed` is the number of
/// bytes of `s` that belong to the literal (including the skipped whitespace
/// and sign). `consumed == 0` means no conversion was performed and the
/// value is 0.
pub fn parse_long(s: &[u8], base: u32) -> (i64, usize, ParseStatus) {
    let len = s.len();
    let mut i = 0;

    while i < len && ctype::is_space(s[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < len && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }
    if i == len {
        return (0, 0, ParseStatus::Success);
    }

    let mut radix = base as u64;

    // A hex prefix only counts if a hex digit follows it; otherwise the
    // subject sequence is just the leading "0" (e.g. "0xz" parses as 0).
    let hex_prefix = i + 1 < len
        && s[i] == b'0'
        && (s[i + 1] == b'x' || s[i + 1] == b'X')
        && i + 2 < len
        && ctype::is_xdigit(s[i + 2]);

    if base == 0 {
        if hex_prefix {
            radix = 16;
            i += 2;
        } else if s[i] == b'0' {
            radix = 8;
        } else {
            radix = 10;
        }
    } else if base == 16 && hex_prefix {
        i += 2;
    }

    if !(2..=36).contains(&radix) {
        return (0, 0, ParseStatus::InvalidBase);
    }

    let abs_max = if negative {
        (i64::MAX as u64) + 1
    } else {
        i64::MAX as u64
    };
    let cutoff = abs_max / radix;
    let cutlim = abs_max % radix;

    let mut acc: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;

    while i < len {
        let Some(digit) = digit_value(s[i]) else {
            break;
        };
        if u64::from(digit) >= radix {
            break;
        }

        any_digits = true;
        if !overflow {
            if acc > cutoff || (acc == cutoff && u64::from(digit) > cutlim) {
                overflow = true;
            } else {
                acc = acc * radix + u64::from(digit);
            }
        }
        i += 1;
    }

    if !any_digits {
        return (0, 0, ParseStatus::Success);
    }

    if overflow {
        return if negative {
            (i64::MIN, i, ParseStatus::Underflow)
        } else {
            (i64::MAX, i, ParseStatus::Overflow)
        };
    }

    let value = if negative {
        (acc as i64).wrapping_neg()
    } else {
        acc as i64
    };

    (value, i, ParseStatus::Success)
}

/// Maps a digit byte to its value; letters cover bases up to 36.
fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' => Some(c - b'a' + 10),
        b'A'..=b'Z' => Some(c - b'A' + 10),
        _ => None,
    }
}
