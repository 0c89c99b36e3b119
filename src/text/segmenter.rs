//! Regex-based sentence splitting.
//!
//! Two boundary rules are used. Normalization splits where a run of
//! sentence enders is followed by whitespace and keeps the enders with the
//! fragment, so the rewritten text loses no punctuation. Counting splits on
//! every run of enders and throws the enders away.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of enders followed by whitespace: the normalization boundary.
static FRAGMENT_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<enders>[.!?]+)\s+").unwrap());

/// A bare run of enders: the counting boundary.
static SENTENCE_ENDERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Splits text into the fragments that normalization capitalizes.
///
/// Each fragment keeps its terminating punctuation and is trimmed. Empty
/// fragments are dropped.
///
/// # Example
/// ```
/// use textlens::text::split_fragments;
///
/// let fragments = split_fragments("hi there. how are you?!  fine");
/// assert_eq!(fragments, vec!["hi there.", "how are you?!", "fine"]);
/// ```
pub fn split_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for caps in FRAGMENT_BOUNDARY.captures_iter(text) {
        let (Some(whole), Some(enders)) = (caps.get(0), caps.name("enders")) else {
            continue;
        };
        fragments.push(&text[start..enders.end()]);
        start = whole.end();
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Splits text into sentences for counting.
///
/// Consecutive enders collapse into one boundary; fragments that are blank
/// after trimming are excluded. Text without any ender is one sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_ENDERS
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Counts sentences using the rules of [`split_sentences`].
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}
