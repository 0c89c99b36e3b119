//! The aggregate analysis record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All derived statistics for one text, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Comma-spaced, sentence-capitalized rendition of the text.
    pub normalized_text: String,
    /// Number of letters-only word tokens.
    pub word_count: usize,
    /// Number of non-blank sentence fragments.
    pub sentence_count: usize,
    /// Number of digit runs.
    pub numeric_token_count: usize,
    /// Every most frequent word, in first-seen order.
    pub most_common_words: Vec<String>,
}

impl Report {
    /// Renders the most common words as one string.
    pub fn most_common_display(&self, separator: &str) -> String {
        self.most_common_words.join(separator)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Normalized text: {}", self.normalized_text)?;
        writeln!(f, "Total words: {}", self.word_count)?;
        writeln!(f, "Total sentences: {}", self.sentence_count)?;
        writeln!(f, "Count of numbers: {}", self.numeric_token_count)?;
        write!(
            f,
            "Most common word(s): {}",
            self.most_common_display(crate::DEFAULT_LIST_SEPARATOR)
        )
    }
}
