//! Error types for textrank_summarizer
//!
//! Summarization itself is total over all inputs and never fails. Errors
//! only arise at the boundaries that accept untrusted configuration or JSON.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Main error type for textrank_summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextRankError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextRankError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error comes from configuration validation
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl From<serde_json::Error> for TextRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
