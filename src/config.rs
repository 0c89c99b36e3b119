//! Configuration for TextLens.

use crate::error::{Result, TextLensError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analyzer configuration.
    pub analyzer: AnalyzerConfig,

    /// Output rendering configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Loads configuration from a JSON file. Missing fields use defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.output.list_separator.is_empty() {
            return Err(TextLensError::Config(
                "output.list_separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Text analyzer configuration.
///
/// The minimum text length is not configurable: every analyzer enforces
/// [`crate::MIN_TEXT_LENGTH`]. Unknown keys, such as an attempt to set a
/// threshold, are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Separator placed between sentence fragments when the normalized
    /// text is reassembled. Set to `""` to concatenate fragments directly.
    /// Default: `" "`.
    pub sentence_separator: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sentence_separator: crate::DEFAULT_SENTENCE_SEPARATOR.to_string(),
        }
    }
}

/// Output configuration for display surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Separator used when rendering the most common words as one string.
    /// Default: `", "`.
    pub list_separator: String,

    /// Pretty-print JSON reports.
    /// Default: true.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            list_separator: crate::DEFAULT_LIST_SEPARATOR.to_string(),
            pretty: true,
        }
    }
}
