//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use sentiview::{RemoteError, SentiviewError};

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// The corpus never loaded; analysis is disabled.
    CorpusUnavailable(String),
    /// Error from the sentiview library.
    Sentiview(SentiviewError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::CorpusUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "corpus_unavailable"),
            ApiError::Sentiview(SentiviewError::Remote(remote)) => {
                let status = match remote {
                    RemoteError::ModelLoading => StatusCode::SERVICE_UNAVAILABLE,
                    RemoteError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                    RemoteError::Unauthorized => StatusCode::UNAUTHORIZED,
                    RemoteError::UnexpectedStatus { .. } => StatusCode::BAD_GATEWAY,
                };
                (status, remote.kind())
            }
            ApiError::Sentiview(SentiviewError::Transport(_)) => (StatusCode::BAD_GATEWAY, "transport"),
            ApiError::Sentiview(SentiviewError::InvalidInput(_)) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Sentiview(SentiviewError::Corpus(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "corpus_unavailable")
            }
            ApiError::Sentiview(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.parts();

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<SentiviewError> for ApiError {
    fn from(err: SentiviewError) -> Self {
        ApiError::Sentiview(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::CorpusUnavailable(msg) => write!(f, "{}", msg),
            ApiError::Sentiview(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}
