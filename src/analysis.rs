//! Pure analysis operations.
//!
//! Every function here is a deterministic transformation of its input with
//! no state and no I/O. [`crate::TextAnalyzer`] layers validation and a
//! current-text slot on top of these.

use crate::report::Report;
use crate::text::{
    count_sentences as count_sentence_fragments, Normalizer, TokenKind, Tokenizer, WordFrequencies,
};

/// Normalizes text with the default sentence separator.
///
/// # Example
/// ```
/// assert_eq!(
///     textlens::normalize("hello, world. goodbye,world."),
///     "Hello, world. Goodbye, world."
/// );
/// ```
pub fn normalize(text: &str) -> String {
    Normalizer::default_config().normalize(text)
}

/// Counts letters-only words. Digits and underscores never form part of a
/// word, and a token mixing letters with digits is not counted.
pub fn count_words(text: &str) -> usize {
    Tokenizer::new(TokenKind::Word).count(text)
}

/// Counts sentences split on runs of `.`, `!` and `?`, ignoring blank
/// fragments.
pub fn count_sentences(text: &str) -> usize {
    count_sentence_fragments(text)
}

/// Counts maximal runs of ASCII digits.
pub fn count_numeric_tokens(text: &str) -> usize {
    Tokenizer::new(TokenKind::Number).count(text)
}

/// Returns every word-character token sharing the highest frequency, in
/// first-seen order. Matching is case-insensitive and results are lowercase.
///
/// # Example
/// ```
/// assert_eq!(
///     textlens::most_common_words("cat dog cat dog bird"),
///     vec!["cat", "dog"]
/// );
/// ```
pub fn most_common_words(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    let tokens = Tokenizer::new(TokenKind::Term).tokenize_to_strs(&folded);
    WordFrequencies::from_tokens(tokens).most_common()
}

/// Computes every statistic with the default normalizer.
pub fn full_report(text: &str) -> Report {
    analyze_with(text, &Normalizer::default_config())
}

/// Computes every statistic, normalizing with the given normalizer.
pub fn analyze_with(text: &str, normalizer: &Normalizer) -> Report {
    Report {
        normalized_text: normalizer.normalize(text),
        word_count: count_words(text),
        sentence_count: count_sentences(text),
        numeric_token_count: count_numeric_tokens(text),
        most_common_words: most_common_words(text),
    }
}
