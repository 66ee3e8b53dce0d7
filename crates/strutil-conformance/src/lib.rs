//! Differential conformance testing for `strutil-core`.
//!
//! The prefix scanners in `strutil-core` promise C-library semantics, so the
//! ground truth is the host libc itself: `capture` runs the host `strtol`/
//! `strtod` over a built-in corpus and records value and consumed length as
//! a JSON fixture set, and `verify` replays the fixtures against the pure
//! Rust scanners, reporting every divergence.

use thiserror::Error;

pub mod fixtures;
pub mod host;
pub mod report;

pub use fixtures::{DoubleFixture, FixtureSet, IntFixture, capture_fixture_set};
pub use report::{
    Mismatch, VerificationReport, render_diff_report, render_verification_markdown,
    verify_fixture_set,
};

/// Errors surfaced by the conformance tooling.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// Fixture inputs travel through C strings, so embedded NULs cannot be
    /// represented.
    #[error("fixture input contains an embedded NUL: {0:?}")]
    EmbeddedNul(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
