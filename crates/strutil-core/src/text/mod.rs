//! String-level helpers: comparison, case conversion, trimming, word
//! extraction.
//!
//! All operations are byte-wise over the UTF-8 representation; case mapping
//! and whitespace classification touch ASCII bytes only, so multi-byte
//! sequences pass through untouched and slice boundaries always land on
//! character boundaries.

pub mod case;
pub mod compare;
pub mod trim;
pub mod words;

// Re-export commonly used functions.
pub use case::{downcase, upcase};
pub use compare::{cmp_nocase, cmp_nocase_uh};
pub use trim::{trim, trim_left, trim_right};
pub use words::extract_words;
