//! Whitespace-delimited word extraction.

use crate::ctype;

/// Divides `s` into words according to whitespace.
///
/// Each maximal run of non-whitespace characters is appended to `words` as
/// one entry, in left-to-right order. The vector is *not* cleared first: a
/// caller that wants a fresh list must clear it before calling, otherwise
/// the new words accumulate after whatever was already there.
///
/// Returns the number of words appended by this call. Empty or
/// all-whitespace input appends nothing and returns 0.
pub fn extract_words(s: &str, words: &mut Vec<String>) -> usize {
    let bytes = s.as_bytes();
    let mut num_words = 0;

    let mut pos = 0;
    while pos < bytes.len() && ctype::is_space(bytes[pos]) {
        pos += 1;
    }
    while pos < bytes.len() {
        let word_start = pos;
        while pos < bytes.len() && !ctype::is_space(bytes[pos]) {
            pos += 1;
        }
        words.push(s[word_start..pos].to_string());
        num_words += 1;

        while pos < bytes.len() && ctype::is_space(bytes[pos]) {
            pos += 1;
        }
    }

    num_words
}
