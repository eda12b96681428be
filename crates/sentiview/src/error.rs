//! Error types for the Sentiview library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sentiview operations.
#[derive(Debug, Error)]
pub enum SentiviewError {
    /// The review corpus could not be loaded.
    #[error("Failed to load reviews: {0}")]
    Corpus(#[from] CorpusLoadError),

    /// The inference request never completed (connect, timeout, body read).
    #[error("Analysis failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The inference endpoint answered with a non-success status.
    #[error("Analysis failed: {0}")]
    Remote(#[from] RemoteError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller passed unusable input (e.g. blank text).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SentiviewError {
    /// Whether this error came from loading the corpus rather than from analysis.
    pub fn is_corpus_error(&self) -> bool {
        matches!(self, SentiviewError::Corpus(_))
    }

    /// The classified remote rejection, if any.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            SentiviewError::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised while loading the review corpus.
#[derive(Debug, Error)]
pub enum CorpusLoadError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row has no text column.
    #[error("Missing '{0}' column in header")]
    MissingTextColumn(String),

    /// No row carried a usable review.
    #[error("No reviews found in {0}")]
    Empty(String),

    /// Remote corpus could not be downloaded.
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

/// Classified HTTP rejection from the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// 503: the hosted model is still warming up.
    #[error("Model is loading, please try again in a few seconds")]
    ModelLoading,

    /// 429: anonymous or free quota exhausted.
    #[error("Rate limit exceeded. Please add an API token for higher limits")]
    RateLimited,

    /// 401: the credential was rejected.
    #[error("Invalid API token")]
    Unauthorized,

    /// Any other non-success status.
    #[error("API error: {code} {status_text}")]
    UnexpectedStatus { code: u16, status_text: String },
}

impl RemoteError {
    /// Classify an HTTP status. Returns `None` for 2xx statuses.
    pub fn from_status(code: u16, status_text: &str) -> Option<Self> {
        match code {
            200..=299 => None,
            503 => Some(RemoteError::ModelLoading),
            429 => Some(RemoteError::RateLimited),
            401 => Some(RemoteError::Unauthorized),
            _ => Some(RemoteError::UnexpectedStatus {
                code,
                status_text: status_text.to_string(),
            }),
        }
    }

    /// Stable machine-readable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::ModelLoading => "model_loading",
            RemoteError::RateLimited => "rate_limited",
            RemoteError::Unauthorized => "unauthorized",
            RemoteError::UnexpectedStatus { .. } => "unexpected_status",
        }
    }
}

/// Result type alias for Sentiview operations.
pub type Result<T> = std::result::Result<T, SentiviewError>;
