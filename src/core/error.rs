//! Crate error type.
//!
//! Only failures that cross a request boundary live here. A missing card is
//! recovered as a placeholder and an empty stack is ordinary data, so most
//! callers only ever see `ReasoningUnavailable` or the corpus errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TolariaError {
    #[error("Card '{0}' not found")]
    CardNotFound(String),

    #[error("Reasoning service unavailable: {0}")]
    ReasoningUnavailable(String),

    #[error("Rule corpus not loaded: {0}")]
    MissingCorpus(String),

    #[error("Invalid rule corpus: {0}")]
    InvalidCorpus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl TolariaError {
    /// Whether the caller can reasonably retry the same request.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, TolariaError::ReasoningUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, TolariaError>;
