//! Error types for TextLens.

use thiserror::Error;

/// The main error type for TextLens operations.
#[derive(Error, Debug)]
pub enum TextLensError {
    /// The supplied text was rejected by `set_text`.
    #[error("Validation error: {reason} (need at least {min_length} characters, got {actual_length})")]
    Validation {
        /// Short machine-stable reason, e.g. `"text too short"`.
        reason: String,
        /// Minimum trimmed length that would have been accepted.
        min_length: usize,
        /// Trimmed length of the rejected text.
        actual_length: usize,
    },

    /// An accessor was called before any text was set.
    #[error("No text available. Please enter text first.")]
    NoText,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TextLensError {
    /// Builds the error returned for input below the minimum trimmed length.
    pub fn too_short(min_length: usize, actual_length: usize) -> Self {
        TextLensError::Validation {
            reason: "text too short".to_string(),
            min_length,
            actual_length,
        }
    }

    /// Returns true for the validation failure raised by `set_text`.
    pub fn is_validation(&self) -> bool {
        matches!(self, TextLensError::Validation { .. })
    }
}

/// Result type alias for TextLens operations.
pub type Result<T> = std::result::Result<T, TextLensError>;

impl From<serde_json::Error> for TextLensError {
    fn from(err: serde_json::Error) -> Self {
        TextLensError::Serialization(err.to_string())
    }
}
