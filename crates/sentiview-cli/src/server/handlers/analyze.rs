//! Analyze handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use sentiview::Sentiment;

use crate::render;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request to analyze a random review.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Optional API token typed into the page.
    #[serde(default)]
    pub token: Option<String>,
}

/// Result of analyzing a random review.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// The review that was classified.
    pub review: String,
    /// Normalized sentiment.
    pub sentiment: Sentiment,
    /// Display text for the sentiment.
    pub display: &'static str,
    /// Icon class for the sentiment.
    pub icon: &'static str,
    /// Top candidate label from the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Top candidate score from the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// POST /api/analyze - Classify a random review.
pub async fn analyze_random(
    State(state): State<AppState>,
    request: Option<Json<AnalyzeRequest>>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let analyzer = state
        .analyzer
        .as_ref()
        .map_err(|reason| ApiError::CorpusUnavailable(reason.clone()))?;

    let request = request.map(|Json(r)| r).unwrap_or_default();
    let credential = state.credential(request.token.as_deref());

    let analysis = analyzer.analyze_random(credential).await?;

    Ok(Json(AnalyzeResponse {
        review: analysis.review.to_string(),
        sentiment: analysis.sentiment,
        display: render::display_text(analysis.sentiment),
        icon: render::icon_class(analysis.sentiment),
        label: analysis.label,
        score: analysis.score,
    }))
}
