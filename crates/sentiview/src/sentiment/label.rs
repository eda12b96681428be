//! Sentiment labels and normalization of raw inference payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label the remote model emits for positive text.
pub const POSITIVE_LABEL: &str = "POSITIVE";

/// Label the remote model emits for negative text.
pub const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Scores must exceed this to count as a decision.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Normalized 3-way sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The first candidate of the first group in a payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// Label, if present and a string.
    pub label: Option<&'a str>,
    /// Score, if present and a number.
    pub score: Option<f64>,
}

/// Loosely structured inference payload.
///
/// Expected shape is `[[{"label": "POSITIVE", "score": 0.99}, ...]]`, but any
/// JSON value is accepted. Shape problems surface as [`Sentiment::Neutral`]
/// in [`normalize`], never as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawApiResponse(pub Value);

impl RawApiResponse {
    /// Parse a response body. Anything that is not JSON becomes an absent payload.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(serde_json::from_slice(bytes).unwrap_or(Value::Null))
    }

    /// `payload[0][0]`, if both levels exist.
    pub fn top_candidate(&self) -> Option<Candidate<'_>> {
        let entry = self.0.get(0)?.get(0)?;
        if entry.is_null() {
            return None;
        }
        Some(Candidate {
            label: entry.get("label").and_then(Value::as_str),
            score: entry.get("score").and_then(Value::as_f64),
        })
    }
}

impl From<Value> for RawApiResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Reduce a raw payload to a sentiment. Total; the worst case is neutral.
///
/// Only the first candidate of the first group is examined. A score of
/// exactly 0.5 is inconclusive.
pub fn normalize(payload: &RawApiResponse) -> Sentiment {
    let Some(candidate) = payload.top_candidate() else {
        return Sentiment::Neutral;
    };

    match (candidate.label, candidate.score) {
        (Some(POSITIVE_LABEL), Some(score)) if score > DECISION_THRESHOLD => Sentiment::Positive,
        (Some(NEGATIVE_LABEL), Some(score)) if score > DECISION_THRESHOLD => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}
