//! Floating-point prefix parsing (strtod semantics).
//!
//! Accepts the full C subject-sequence grammar: decimal significand with
//! optional fraction and `e`/`E` exponent, hexadecimal significand
//! (`0x`/`0X`) with optional `p`/`P` binary exponent, and the special values
//! `inf`/`infinity` and `nan(n-char-seq)`, all case-insensitive. Decimal
//! values are delegated to `str::parse::<f64>()` (correctly rounded, same
//! result as glibc); hexadecimal values are composed here with a single
//! round-to-nearest-even step.

use crate::ctype;

/// Parses the longest valid leading floating-point literal of `s`.
///
/// Equivalent to C `strtod`. Returns `(value, consumed)` where `consumed`
/// counts the bytes belonging to the literal (including skipped leading
/// whitespace and sign). `consumed == 0` means no conversion was performed
/// and the value is 0.
///
/// As in libc, a dangling exponent introducer is not consumed (`"1e+x"`
/// parses as `1.0` with one byte consumed) and a hex prefix without digits
/// backtracks to the leading zero (`"0xz"` parses as `0.0` with one byte
/// consumed). Out-of-range magnitudes round to infinity; tiny magnitudes
/// round through the subnormals to (signed) zero.
pub fn parse_double(s: &[u8]) -> (f64, usize) {
    let len = s.len();
    let mut i = 0;

    while i < len && ctype::is_space(s[i]) {
        i += 1;
    }

    // The slice handed to the decimal parser starts at the sign.
    let num_start = i;
    let mut negative = false;
    if i < len && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }

    // Special values. "infinity" must be tried before its prefix "inf".
    if let Some(n) = match_ignore_case(&s[i..], b"infinity") {
        let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return (value, i + n);
    }
    if let Some(n) = match_ignore_case(&s[i..], b"inf") {
        let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return (value, i + n);
    }
    if let Some(n) = match_ignore_case(&s[i..], b"nan") {
        let mut end = i + n;
        // Optional "(n-char-seq)", consumed only if the paren closes.
        if end < len && s[end] == b'(' {
            let mut k = end + 1;
            while k < len && (ctype::is_alnum(s[k]) || s[k] == b'_') {
                k += 1;
            }
            if k < len && s[k] == b')' {
                end = k + 1;
            }
        }
        let value = if negative { -f64::NAN } else { f64::NAN };
        return (value, end);
    }

    // Hexadecimal form.
    if i + 1 < len && s[i] == b'0' && (s[i + 1] == b'x' || s[i + 1] == b'X') {
        return parse_hex(s, i, negative);
    }

    // Decimal form: digits with at most one point.
    let mut any_digits = false;
    let mut seen_point = false;
    while i < len {
        let c = s[i];
        if ctype::is_digit(c) {
            any_digits = true;
        } else if c == b'.' && !seen_point {
            seen_point = true;
        } else {
            break;
        }
        i += 1;
    }
    if !any_digits {
        return (0.0, 0);
    }

    // Optional exponent, consumed only if at least one digit follows.
    if i < len && (s[i] == b'e' || s[i] == b'E') {
        let mut j = i + 1;
        if j < len && (s[j] == b'+' || s[j] == b'-') {
            j += 1;
        }
        let first_digit = j;
        while j < len && ctype::is_digit(s[j]) {
            j += 1;
        }
        if j > first_digit {
            i = j;
        }
    }

    (decimal_value(&s[num_start..i]), i)
}

/// Converts a scanner-validated decimal literal to its value.
fn decimal_value(text: &[u8]) -> f64 {
    // The scanner admits only ASCII sign/digits/point/exponent, so the slice
    // is valid UTF-8 and inside f64's FromStr grammar.
    std::str::from_utf8(text)
        .ok()
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Case-insensitive prefix match; returns the matched length.
fn match_ignore_case(s: &[u8], word: &[u8]) -> Option<usize> {
    if s.len() < word.len() {
        return None;
    }
    let matched = s[..word.len()]
        .iter()
        .zip(word)
        .all(|(&a, &b)| ctype::to_lower(a) == b);
    matched.then_some(word.len())
}

/// Parses a hexadecimal significand starting at the `0` of its `0x` prefix.
///
/// Digits accumulate into a 64-bit mantissa; once it is saturated, further
/// digits only adjust the exponent and fold into a sticky bit so the final
/// rounding still sees them.
fn parse_hex(s: &[u8], hex_start: usize, negative: bool) -> (f64, usize) {
    let len = s.len();
    let mut i = hex_start + 2;

    let mut mant: u64 = 0;
    let mut sticky = false;
    let mut exp: i64 = 0;
    let mut any_digits = false;
    let mut seen_point = false;

    while i < len {
        let c = s[i];
        if ctype::is_xdigit(c) {
            any_digits = true;
            let d = hex_value(c);
            if mant >> 60 == 0 {
                mant = mant * 16 + u64::from(d);
                if seen_point {
                    exp -= 4;
                }
            } else {
                if !seen_point {
                    exp += 4;
                }
                if d != 0 {
                    sticky = true;
                }
            }
        } else if c == b'.' && !seen_point {
            seen_point = true;
        } else {
            break;
        }
        i += 1;
    }

    if !any_digits {
        // No digits after the prefix: the subject sequence is the leading
        // "0" alone and the consumed region ends before the 'x'.
        let zero = if negative { -0.0 } else { 0.0 };
        return (zero, hex_start + 1);
    }

    // Optional binary exponent, consumed only if at least one digit follows.
    if i < len && (s[i] == b'p' || s[i] == b'P') {
        let mut j = i + 1;
        let mut exp_negative = false;
        if j < len && (s[j] == b'+' || s[j] == b'-') {
            exp_negative = s[j] == b'-';
            j += 1;
        }
        let first_digit = j;
        let mut pexp: i64 = 0;
        while j < len && ctype::is_digit(s[j]) {
            // Clamp far beyond the representable range; monotonic is enough.
            pexp = (pexp * 10 + i64::from(s[j] - b'0')).min(1 << 20);
            j += 1;
        }
        if j > first_digit {
            exp += if exp_negative { -pexp } else { pexp };
            i = j;
        }
    }

    (compose(negative, mant, sticky, exp), i)
}

/// Builds the `f64` for `±mant * 2^exp`, rounding once to nearest-even.
///
/// `sticky` records whether any nonzero digit was discarded while
/// accumulating the mantissa. Handles overflow to infinity, the subnormal
/// range, and signed zero.
fn compose(negative: bool, mant: u64, sticky: bool, exp: i64) -> f64 {
    let sign = if negative { 1u64 << 63 } else { 0 };
    if mant == 0 {
        return f64::from_bits(sign);
    }

    // Normalize so the top bit of the mantissa is set.
    let lz = mant.leading_zeros();
    let mant = mant << lz;
    let exp = exp - i64::from(lz);

    // value = 1.f * 2^e
    let mut e = exp + 63;
    if e > 1023 {
        return f64::from_bits(sign | (0x7FF << 52));
    }
    if e < -1075 {
        return f64::from_bits(sign);
    }

    // Bits of precision available at this magnitude (53 for normals,
    // shrinking across the subnormal range).
    let precision = if e >= -1022 { 53 } else { 53 + 1022 + e };
    if precision == 0 {
        // Strictly between zero and half the smallest subnormal rounds to
        // zero; the exact halfway point ties to even (zero); anything
        // beyond it rounds up.
        let below = sticky || (mant << 1) != 0;
        return if below {
            f64::from_bits(sign | 1)
        } else {
            f64::from_bits(sign)
        };
    }

    let shift = (64 - precision) as u32;
    let round = (mant >> (shift - 1)) & 1 == 1;
    let sticky = sticky || (mant & ((1u64 << (shift - 1)) - 1)) != 0;
    let mut frac = mant >> shift;
    let round_up = round && (sticky || frac & 1 == 1);

    if e >= -1022 {
        // Normal: frac holds exactly 53 bits including the hidden one.
        if round_up {
            frac += 1;
            if frac == 1u64 << 53 {
                frac >>= 1;
                e += 1;
                if e > 1023 {
                    return f64::from_bits(sign | (0x7FF << 52));
                }
            }
        }
        let bits = sign | (((e + 1023) as u64) << 52) | (frac & ((1u64 << 52) - 1));
        f64::from_bits(bits)
    } else {
        // Subnormal: value = frac * 2^-1074, so frac is the bit pattern
        // directly; a rounding carry promotes to the smallest normal.
        if round_up {
            frac += 1;
        }
        f64::from_bits(sign | frac)
    }
}

/// Maps a hex digit byte to its value.
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(x: f64) -> u64 {
        x.to_bits()
    }

    #[test]
    fn test_decimal_basic() {
        assert_eq!(parse_double(b"3.14xyz"), (3.14, 4));
        assert_eq!(parse_double(b"42"), (42.0, 2));
        assert_eq!(parse_double(b"-2.5e-3"), (-0.0025, 7));
        assert_eq!(parse_double(b"  1e10"), (1e10, 6));
        assert_eq!(parse_double(b"+0.5"), (0.5, 4));
    }

    #[test]
    fn test_decimal_point_forms() {
        assert_eq!(parse_double(b".5"), (0.5, 2));
        assert_eq!(parse_double(b"5."), (5.0, 2));
        assert_eq!(parse_double(b"2.e3"), (2000.0, 4));
        // A second point ends the literal.
        assert_eq!(parse_double(b"1.2.3"), (1.2, 3));
    }

    #[test]
    fn test_no_conversion() {
        assert_eq!(parse_double(b""), (0.0, 0));
        assert_eq!(parse_double(b"   "), (0.0, 0));
        assert_eq!(parse_double(b"xyz"), (0.0, 0));
        assert_eq!(parse_double(b"."), (0.0, 0));
        assert_eq!(parse_double(b"-."), (0.0, 0));
        assert_eq!(parse_double(b"e5"), (0.0, 0));
    }

    #[test]
    fn test_dangling_exponent_backtracks() {
        assert_eq!(parse_double(b"1e+x"), (1.0, 1));
        assert_eq!(parse_double(b"1e"), (1.0, 1));
        assert_eq!(parse_double(b"2.5E- "), (2.5, 3));
        assert_eq!(parse_double(b"1e+5x"), (1e5, 4));
    }

    #[test]
    fn test_range_extremes() {
        assert_eq!(parse_double(b"1e999"), (f64::INFINITY, 5));
        assert_eq!(parse_double(b"-1e999"), (f64::NEG_INFINITY, 6));
        let (tiny, consumed) = parse_double(b"1e-400");
        assert_eq!(consumed, 6);
        assert_eq!(tiny, 0.0);
        assert_eq!(parse_double(b"4.9e-324").0, f64::from_bits(1));
    }

    #[test]
    fn test_special_values() {
        assert_eq!(parse_double(b"inf"), (f64::INFINITY, 3));
        assert_eq!(parse_double(b"INFINITY"), (f64::INFINITY, 8));
        assert_eq!(parse_double(b"-Inf rest"), (f64::NEG_INFINITY, 4));
        // "infin" matches only the "inf" prefix.
        assert_eq!(parse_double(b"infin"), (f64::INFINITY, 3));

        let (value, consumed) = parse_double(b"nan");
        assert!(value.is_nan());
        assert_eq!(consumed, 3);

        let (value, consumed) = parse_double(b"-NaN(0x42)x");
        assert!(value.is_nan());
        assert!(value.is_sign_negative());
        assert_eq!(consumed, 10);

        // An unclosed char-seq is not consumed.
        let (value, consumed) = parse_double(b"nan(abc");
        assert!(value.is_nan());
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_hex_basic() {
        assert_eq!(parse_double(b"0x1p4"), (16.0, 5));
        assert_eq!(parse_double(b"0x10"), (16.0, 4));
        assert_eq!(parse_double(b"0x1.8"), (1.5, 5));
        assert_eq!(parse_double(b"0x.8p1"), (1.0, 6));
        assert_eq!(parse_double(b"0x1.8p1"), (3.0, 7));
        assert_eq!(parse_double(b"0xfp-4"), (0.9375, 6));
        assert_eq!(parse_double(b"-0x10p-1 tail"), (-8.0, 8));
        assert_eq!(parse_double(b"0X1P2"), (4.0, 5));
    }

    #[test]
    fn test_hex_prefix_backtrack() {
        assert_eq!(parse_double(b"0xz"), (0.0, 1));
        assert_eq!(parse_double(b"0x"), (0.0, 1));
        assert_eq!(parse_double(b"0x.p1"), (0.0, 1));
        let (value, consumed) = parse_double(b"-0xz");
        assert_eq!(consumed, 2);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[test]
    fn test_hex_dangling_binary_exponent() {
        // "p" without digits is not part of the literal.
        assert_eq!(parse_double(b"0x1p"), (1.0, 3));
        assert_eq!(parse_double(b"0x1p+x"), (1.0, 3));
    }

    #[test]
    fn test_hex_subnormals() {
        // Smallest subnormal.
        assert_eq!(bits(parse_double(b"0x1p-1074").0), 1);
        // Exactly half of it ties to even, i.e. zero.
        assert_eq!(parse_double(b"0x1p-1075").0, 0.0);
        // A hair above half rounds up to the smallest subnormal.
        assert_eq!(bits(parse_double(b"0x1.1p-1075").0), 1);
        // Far below underflows to zero.
        assert_eq!(parse_double(b"0x1p-1200").0, 0.0);
        // Largest subnormal.
        let (value, _) = parse_double(b"0x0.fffffffffffffp-1022");
        assert_eq!(bits(value), 0x000F_FFFF_FFFF_FFFF);
    }

    #[test]
    fn test_hex_overflow_to_infinity() {
        assert_eq!(parse_double(b"0x1p1024").0, f64::INFINITY);
        assert_eq!(parse_double(b"-0x1p1024").0, f64::NEG_INFINITY);
        // Largest finite double.
        let (value, _) = parse_double(b"0x1.fffffffffffffp1023");
        assert_eq!(value, f64::MAX);
    }

    #[test]
    fn test_hex_rounding_to_nearest_even() {
        // 53 significand bits exactly: representable.
        let (value, _) = parse_double(b"0x1.0000000000001p0");
        assert_eq!(bits(value), 0x3FF0_0000_0000_0001);
        // One extra half-ulp bit ties to even (down).
        let (value, _) = parse_double(b"0x1.00000000000008p0");
        assert_eq!(bits(value), 0x3FF0_0000_0000_0000);
        // Tie on an odd mantissa rounds up.
        let (value, _) = parse_double(b"0x1.00000000000018p0");
        assert_eq!(bits(value), 0x3FF0_0000_0000_0002);
        // Above the tie rounds up even on an even mantissa.
        let (value, _) = parse_double(b"0x1.000000000000081p0");
        assert_eq!(bits(value), 0x3FF0_0000_0000_0001);
    }

    #[test]
    fn test_hex_long_mantissa_sticky() {
        // More digits than the accumulator holds; the dropped trailing digit
        // only matters as a sticky bit. 2^64 + 1 rounds to 2^64.
        let (value, consumed) = parse_double(b"0x10000000000000001p0");
        assert_eq!(consumed, 21);
        assert_eq!(value, 18446744073709551616.0);
    }

    #[test]
    fn test_signed_zero() {
        let (value, consumed) = parse_double(b"-0.0");
        assert_eq!(consumed, 4);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
        let (value, _) = parse_double(b"-0x0p0");
        assert!(value.is_sign_negative());
    }

    #[test]
    fn test_whitespace_and_sign_counted_in_consumed() {
        assert_eq!(parse_double(b" \t-1.5rest"), (-1.5, 6));
        assert_eq!(parse_double(b"\x0b2.0"), (2.0, 4));
    }
}
