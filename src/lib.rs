//! # TextLens - Text Statistics Engine
//!
//! TextLens takes a block of free-form natural-language text and derives
//! simple statistics from it: a normalized rendition of the text, the word
//! count, the sentence count, the number of numeric tokens, and the most
//! frequent word or words.
//!
//! ## Quick Start
//!
//! ```rust
//! use textlens::TextAnalyzer;
//!
//! let mut analyzer = TextAnalyzer::new();
//! analyzer.set_text("the cat sat. the dog sat, too!")?;
//!
//! let report = analyzer.get_full_report()?;
//! assert_eq!(report.normalized_text, "The cat sat. The dog sat, too!");
//! assert_eq!(report.sentence_count, 2);
//! assert_eq!(report.most_common_words, vec!["the", "sat"]);
//! # Ok::<(), textlens::TextLensError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Tokenization, normalization, sentence splitting, frequencies
//! - [`analysis`] - Pure, stateless analysis functions
//! - [`analyzer`] - The stateful analyzer that validates and holds text
//! - [`report`] - The aggregate analysis record
//! - [`config`] - Serde-backed configuration
//!
//! The library never logs, touches files (other than
//! [`Config::from_file`]), or keeps state beyond one analyzer's text.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod report;
pub mod text;

// Re-export commonly used types
pub use analysis::{
    count_numeric_tokens, count_sentences, count_words, full_report, most_common_words, normalize,
};
pub use analyzer::{TextAnalyzer, TextProcessor};
pub use config::{AnalyzerConfig, Config, OutputConfig};
pub use error::{Result, TextLensError};
pub use report::Report;
pub use text::{Normalizer, Token, TokenKind, Tokenizer, WordFrequencies};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum trimmed text length accepted by `set_text`. Not configurable.
pub const MIN_TEXT_LENGTH: usize = 15;

/// Default separator between normalized sentence fragments.
pub const DEFAULT_SENTENCE_SEPARATOR: &str = " ";

/// Default separator for rendering the most common words.
pub const DEFAULT_LIST_SEPARATOR: &str = ", ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(MIN_TEXT_LENGTH, 15);
        assert_eq!(DEFAULT_SENTENCE_SEPARATOR, " ");
        assert_eq!(DEFAULT_LIST_SEPARATOR, ", ");
    }
}
