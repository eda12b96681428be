//! Mock classifier for offline demos and testing.

use async_trait::async_trait;
use serde_json::json;

use crate::error::{RemoteError, Result, SentiviewError};

use super::classifier::SentimentClassifier;
use super::label::{RawApiResponse, NEGATIVE_LABEL, POSITIVE_LABEL};

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "loved", "wonderful", "amazing", "best", "enjoyed",
    "fantastic", "brilliant", "perfect",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "hated", "boring", "worst", "poor", "dull", "waste",
    "disappointing", "horrible",
];

/// Mock classifier that scores text by counting cue words.
///
/// Produces a payload in the same `[[{label, score}, ...]]` shape as the
/// hosted model, so results go through the real normalizer. Balanced text
/// scores exactly 0.5 and normalizes to neutral.
pub struct MockClassifier {
    failure: Option<RemoteError>,
}

impl MockClassifier {
    /// Create a new mock classifier.
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Create a mock that rejects every call with the given error.
    pub fn failing(error: RemoteError) -> Self {
        Self {
            failure: Some(error),
        }
    }

    /// Build the payload the mock would return for `text`.
    pub fn payload_for(text: &str) -> RawApiResponse {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count() as i64;
        let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count() as i64;
        let balance = positive - negative;

        let score = (0.5 + 0.15 * balance.unsigned_abs() as f64).min(0.99);
        let (top, other) = if balance < 0 {
            (NEGATIVE_LABEL, POSITIVE_LABEL)
        } else {
            (POSITIVE_LABEL, NEGATIVE_LABEL)
        };

        RawApiResponse::from(json!([[
            {"label": top, "score": score},
            {"label": other, "score": 1.0 - score}
        ]]))
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for MockClassifier {
    async fn classify_raw(&self, text: &str, _credential: Option<&str>) -> Result<RawApiResponse> {
        if let Some(err) = &self.failure {
            return Err(err.clone().into());
        }
        if text.trim().is_empty() {
            return Err(SentiviewError::InvalidInput("review text is empty".to_string()));
        }
        Ok(Self::payload_for(text))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
