//! Corpus status and review handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Whether the analyze action is available.
    pub ready: bool,
    /// Number of loaded reviews.
    pub review_count: usize,
    /// Where the reviews came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Classifier backend name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Whether a server-side token is configured.
    pub has_default_token: bool,
    /// Why loading failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response carrying one review.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

/// GET /api/status - Corpus and classifier status.
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let has_default_token = state.default_token.is_some();

    let response = match &state.analyzer {
        Ok(analyzer) => StatusResponse {
            ready: true,
            review_count: analyzer.corpus().len(),
            source: Some(analyzer.corpus().metadata().source.clone()),
            classifier: Some(analyzer.classifier_name().to_string()),
            has_default_token,
            error: None,
        },
        Err(reason) => StatusResponse {
            ready: false,
            review_count: 0,
            source: None,
            classifier: None,
            has_default_token,
            error: Some(reason.clone()),
        },
    };

    Json(response)
}

/// GET /api/review - A random review, without classifying it.
pub async fn get_random_review(
    State(state): State<AppState>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let analyzer = state
        .analyzer
        .as_ref()
        .map_err(|reason| ApiError::CorpusUnavailable(reason.clone()))?;

    Ok(Json(ReviewResponse {
        review: analyzer.corpus().random().to_string(),
    }))
}
