//! Fixture verification and report rendering.

use serde::{Deserialize, Serialize};

use strutil_core::parse::{parse_double, parse_long};

use crate::fixtures::FixtureSet;

/// One divergence between the host libc and `strutil-core`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mismatch {
    /// Which parser diverged: `"strtol"` or `"strtod"`.
    pub function: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of replaying a fixture set against `strutil-core`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub total: usize,
    pub passed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Replays every fixture against the pure Rust scanners.
///
/// Doubles compare bit-for-bit, except that any NaN matches any NaN (the
/// host is free to pick its own payload).
pub fn verify_fixture_set(set: &FixtureSet) -> VerificationReport {
    let mut mismatches = Vec::new();

    for case in &set.ints {
        let (value, consumed, _) = parse_long(case.input.as_bytes(), case.base);
        if value != case.expected_value || consumed != case.expected_consumed {
            mismatches.push(Mismatch {
                function: "strtol".to_string(),
                input: format!("{:?} (base {})", case.input, case.base),
                expected: format!("value {} consumed {}", case.expected_value, case.expected_consumed),
                actual: format!("value {value} consumed {consumed}"),
            });
        }
    }

    for case in &set.doubles {
        let (value, consumed) = parse_double(case.input.as_bytes());
        let expected = f64::from_bits(case.expected_bits);
        let value_matches =
            value.to_bits() == case.expected_bits || (value.is_nan() && expected.is_nan());
        if !value_matches || consumed != case.expected_consumed {
            mismatches.push(Mismatch {
                function: "strtod".to_string(),
                input: format!("{:?}", case.input),
                expected: format!(
                    "value {expected:e} (bits {:#018x}) consumed {}",
                    case.expected_bits, case.expected_consumed
                ),
                actual: format!(
                    "value {value:e} (bits {:#018x}) consumed {consumed}",
                    value.to_bits()
                ),
            });
        }
    }

    let total = set.ints.len() + set.doubles.len();
    VerificationReport {
        total,
        passed: total - mismatches.len(),
        mismatches,
    }
}

/// Renders a verification report as Markdown.
pub fn render_verification_markdown(report: &VerificationReport) -> String {
    let mut out = String::new();
    out.push_str("# strutil conformance report\n\n");
    out.push_str(&format!(
        "- total: {}\n- passed: {}\n- failed: {}\n\n",
        report.total,
        report.passed,
        report.mismatches.len()
    ));

    if report.all_passed() {
        out.push_str("All fixtures matched the host libc.\n");
        return out;
    }

    out.push_str("| function | input | expected | actual |\n");
    out.push_str("|---|---|---|---|\n");
    for m in &report.mismatches {
        out.push_str(&format!(
            "| {} | `{}` | {} | {} |\n",
            m.function, m.input, m.expected, m.actual
        ));
    }
    out
}

/// Renders an inline diff between expected and actual text payloads.
///
/// Matching lines are prefixed with two spaces, divergent pairs with `-`
/// (expected) and `+` (actual).
pub fn render_diff_report(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let rows = expected_lines.len().max(actual_lines.len());

    let mut out = String::new();
    let mut divergent = 0;
    for i in 0..rows {
        let left = expected_lines.get(i).copied();
        let right = actual_lines.get(i).copied();
        if left == right {
            out.push_str(&format!("  {}\n", left.unwrap_or("")));
        } else {
            divergent += 1;
            if let Some(line) = left {
                out.push_str(&format!("- {line}\n"));
            }
            if let Some(line) = right {
                out.push_str(&format!("+ {line}\n"));
            }
        }
    }
    out.push_str(&format!("{divergent} divergent line(s) of {rows}\n"));
    out
}
