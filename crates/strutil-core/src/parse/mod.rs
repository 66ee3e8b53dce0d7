//! Greedy numeric prefix scanners with C-library semantics.
//!
//! These parse the longest valid leading integer or floating-point literal
//! and report how many bytes were consumed, like `strtol`/`strtod` report
//! through `endptr`. A consumed length of zero means no conversion was
//! performed.

pub mod float;
pub mod int;

pub use float::parse_double;
pub use int::{ParseStatus, parse_long};
