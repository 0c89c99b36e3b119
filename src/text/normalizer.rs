//! Text normalization for display.

use crate::config::AnalyzerConfig;
use crate::text::segmenter::split_fragments;

/// Rewrites raw text into a display-ready form.
///
/// Commas get a following space, and the first letter of every sentence
/// fragment is uppercased. Nothing else is altered, so every word, number
/// and sentence ender of the input survives.
#[derive(Debug, Clone)]
pub struct Normalizer {
    separator: String,
}

impl Normalizer {
    /// Creates a normalizer from the analyzer configuration.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            separator: config.sentence_separator.clone(),
        }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(&AnalyzerConfig::default())
    }

    /// Returns the separator placed between fragments.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Normalizes text: comma spacing, then per-fragment capitalization,
    /// then reassembly with the configured separator.
    pub fn normalize(&self, text: &str) -> String {
        let spaced = space_commas(text);
        split_fragments(&spaced)
            .into_iter()
            .map(capitalize_first_letter)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Inserts one space after every comma that is directly followed by a
/// non-whitespace character. Commas already followed by whitespace, and a
/// trailing comma, are left alone.
pub fn space_commas(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if c == ',' {
            if let Some(next) = chars.peek() {
                if !next.is_whitespace() {
                    result.push(' ');
                }
            }
        }
    }

    result
}

/// Uppercases the first alphabetic character of a fragment in place.
///
/// Leading digits, punctuation and whitespace are skipped. The rest of the
/// fragment is not lowercased.
pub fn capitalize_first_letter(fragment: &str) -> String {
    match fragment.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut result = String::with_capacity(fragment.len());
            result.push_str(&fragment[..idx]);
            result.extend(c.to_uppercase());
            result.push_str(&fragment[idx + c.len_utf8()..]);
            result
        }
        None => fragment.to_string(),
    }
}
