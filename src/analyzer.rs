//! The stateful analyzer holding the current text.

use crate::analysis;
use crate::config::AnalyzerConfig;
use crate::error::{Result, TextLensError};
use crate::report::Report;
use crate::text::Normalizer;

/// Capability contract for text processors.
pub trait TextProcessor {
    /// Returns the cleaned, display-ready text.
    fn clean_text(&self) -> Result<String>;

    /// Performs the full analysis.
    fn analyze(&self) -> Result<Report>;
}

/// Owns one input text and derives statistics from it on demand.
///
/// Nothing is cached: each accessor recomputes from the current text, so
/// replacing the text with [`TextAnalyzer::set_text`] can never leave a
/// stale value behind.
///
/// # Example
/// ```
/// use textlens::TextAnalyzer;
///
/// let mut analyzer = TextAnalyzer::new();
/// assert!(analyzer.get_word_count().is_err());
///
/// analyzer.set_text("Room 42 has 3 exits. Pick one.")?;
/// assert_eq!(analyzer.get_word_count()?, 5);
/// assert_eq!(analyzer.get_numeric_token_count()?, 2);
/// # Ok::<(), textlens::TextLensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
    normalizer: Normalizer,
    text: Option<String>,
}

impl TextAnalyzer {
    /// Creates an analyzer with no text and default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with no text.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let normalizer = Normalizer::new(&config);
        Self {
            config,
            normalizer,
            text: None,
        }
    }

    /// Creates an analyzer and sets its text in one step.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let mut analyzer = Self::new();
        analyzer.set_text(text)?;
        Ok(analyzer)
    }

    /// Returns the analyzer configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Replaces the current text.
    ///
    /// Fails with [`TextLensError::Validation`] when the trimmed text is
    /// shorter than [`crate::MIN_TEXT_LENGTH`] characters. On failure the previous
    /// text, if any, is kept.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        let length = text.trim().chars().count();
        if length < crate::MIN_TEXT_LENGTH {
            return Err(TextLensError::too_short(crate::MIN_TEXT_LENGTH, length));
        }
        self.text = Some(text);
        Ok(())
    }

    /// The current text, exactly as supplied.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns true once text has been set successfully.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    fn current(&self) -> Result<&str> {
        self.text.as_deref().ok_or(TextLensError::NoText)
    }

    /// Normalized rendition of the current text.
    pub fn get_normalized_text(&self) -> Result<String> {
        Ok(self.normalizer.normalize(self.current()?))
    }

    /// Number of letters-only words.
    pub fn get_word_count(&self) -> Result<usize> {
        Ok(analysis::count_words(self.current()?))
    }

    /// Number of sentences.
    pub fn get_sentence_count(&self) -> Result<usize> {
        Ok(analysis::count_sentences(self.current()?))
    }

    /// Number of digit runs.
    pub fn get_numeric_token_count(&self) -> Result<usize> {
        Ok(analysis::count_numeric_tokens(self.current()?))
    }

    /// Every most frequent word, in first-seen order.
    pub fn get_most_common_words(&self) -> Result<Vec<String>> {
        Ok(analysis::most_common_words(self.current()?))
    }

    /// Most frequent words joined with `separator`, for display surfaces.
    pub fn get_most_common_words_display(&self, separator: &str) -> Result<String> {
        Ok(self.get_most_common_words()?.join(separator))
    }

    /// All statistics in one record.
    pub fn get_full_report(&self) -> Result<Report> {
        Ok(analysis::analyze_with(self.current()?, &self.normalizer))
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor for TextAnalyzer {
    fn clean_text(&self) -> Result<String> {
        self.get_normalized_text()
    }

    fn analyze(&self) -> Result<Report> {
        self.get_full_report()
    }
}
