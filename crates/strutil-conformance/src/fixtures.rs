//! Fixture corpus and capture.
//!
//! The corpus leans on the awkward corners of the strtol/strtod grammars:
//! prefix backtracking, dangling exponents, overflow clamping, subnormals,
//! and the special values. Expected doubles are stored as raw bits so the
//! JSON round trip is exact.

use serde::{Deserialize, Serialize};

use crate::{ConformanceError, host};

/// One captured `strtol` case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntFixture {
    pub input: String,
    pub base: u32,
    pub expected_value: i64,
    pub expected_consumed: usize,
}

/// One captured `strtod` case. The value is stored as `f64` bits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoubleFixture {
    pub input: String,
    pub expected_bits: u64,
    pub expected_consumed: usize,
}

/// A captured fixture set, serialized to JSON by the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureSet {
    pub ints: Vec<IntFixture>,
    pub doubles: Vec<DoubleFixture>,
}

/// The built-in `strtol` corpus: `(input, base)` pairs.
pub fn int_corpus() -> Vec<(&'static str, u32)> {
    vec![
        ("42abc", 10),
        ("  -17", 10),
        ("+99", 10),
        ("", 10),
        ("   ", 10),
        ("abc", 10),
        ("-", 10),
        ("\t\n42 43", 10),
        ("-0", 10),
        ("0x1A", 16),
        ("FF", 16),
        ("0x", 16),
        ("0xz", 16),
        ("0x10", 0),
        ("010", 0),
        ("10", 0),
        ("0xz", 0),
        ("z", 36),
        ("9223372036854775807", 10),
        ("9223372036854775808", 10),
        ("-9223372036854775808", 10),
        ("-9223372036854775809", 10),
        ("99999999999999999999999999", 10),
    ]
}

/// The built-in `strtod` corpus.
pub fn double_corpus() -> Vec<&'static str> {
    vec![
        "3.14xyz",
        "42",
        "  -17.5",
        "+.5",
        "5.",
        "2.e3",
        "1.2.3",
        "1e10",
        "-2.5e-3",
        "1e999",
        "-1e999",
        "1e-400",
        "4.9e-324",
        "1e+x",
        "1e",
        ".",
        "",
        "   ",
        "abc",
        "-0.0",
        "inf",
        "-Infinity",
        "infin",
        "nan",
        "-nan",
        "nan(0x42)tail",
        "nan(abc",
        "0x1p4",
        "0x.8p1",
        "0x1.8",
        "0x1p",
        "0xz",
        "0x",
        "-0x10p-1 tail",
        "0x1p-1074",
        "0x1p-1075",
        "0x1.1p-1075",
        "0x1p1024",
        "0x1.fffffffffffffp1023",
        "0x0.fffffffffffffp-1022",
        "0x10000000000000001p0",
    ]
}

/// Captures the built-in corpus through the host libc.
pub fn capture_fixture_set() -> Result<FixtureSet, ConformanceError> {
    let mut set = FixtureSet::default();

    for (input, base) in int_corpus() {
        let (expected_value, expected_consumed) = host::strtol(input, base)?;
        set.ints.push(IntFixture {
            input: input.to_string(),
            base,
            expected_value,
            expected_consumed,
        });
    }

    for input in double_corpus() {
        let (value, expected_consumed) = host::strtod(input)?;
        set.doubles.push(DoubleFixture {
            input: input.to_string(),
            expected_bits: value.to_bits(),
            expected_consumed,
        });
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_covers_corpus() {
        let set = capture_fixture_set().unwrap();
        assert_eq!(set.ints.len(), int_corpus().len());
        assert_eq!(set.doubles.len(), double_corpus().len());
    }

    #[test]
    fn test_fixture_set_json_round_trip() {
        let set = capture_fixture_set().unwrap();
        let body = serde_json::to_string_pretty(&set).unwrap();
        let back: FixtureSet = serde_json::from_str(&body).unwrap();
        assert_eq!(back.ints.len(), set.ints.len());
        assert_eq!(back.doubles[0].expected_bits, set.doubles[0].expected_bits);
    }
}
