//! # strutil-core
//!
//! Locale-independent string utilities in pure safe Rust.
//!
//! The helpers here mirror the classic C/C++ toolbox: case-insensitive
//! comparison, byte-wise case conversion, whitespace word splitting and
//! trimming, and greedy prefix parsing of integers and floats with `strtol`/
//! `strtod` semantics. Instead of calling into the platform's libc (and
//! inheriting its locale state), the byte classifiers and prefix scanners are
//! implemented in this crate, so results are identical everywhere. No
//! `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod convert;
pub mod ctype;
pub mod parse;
pub mod text;

// Re-export the public helper surface at the crate root.
pub use convert::{string_to_double, string_to_double_exact, string_to_int, string_to_int_exact};
pub use text::{cmp_nocase, cmp_nocase_uh, downcase, extract_words, trim, trim_left, trim_right, upcase};
