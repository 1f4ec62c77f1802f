//! # tally-tokenizer
//!
//! splits news titles into normalized words.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

/// Words shorter than this are dropped by [`tokenize`].
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Replace punctuation by spaces, split on whitespace, drop words shorter
/// than `min_length` characters and lowercase the rest.
///
/// # Examples
/// ```rust
/// use tally_tokenizer::{tokenize, DEFAULT_MIN_LENGTH};
///
/// assert_eq!(
///     tokenize("U.S. Senate passes bill", DEFAULT_MIN_LENGTH),
///     vec!["senate", "passes", "bill"]
/// );
/// ```
pub fn tokenize<T: ToString>(text: T, min_length: usize) -> Vec<String> {
    text.to_string()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_length)
        .map(str::to_lowercase)
        .collect()
}
