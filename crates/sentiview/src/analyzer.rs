//! Main Analyzer struct and public API.

use std::sync::Arc;

use serde::Serialize;

use crate::corpus::{Corpus, Review};
use crate::error::Result;
use crate::sentiment::{normalize, Sentiment, SentimentClassifier};

/// Result of analyzing one review.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The review that was classified.
    pub review: Review,
    /// Normalized sentiment.
    pub sentiment: Sentiment,
    /// Label of the top candidate, if the payload had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Score of the top candidate, if the payload had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Picks reviews from a corpus and classifies them.
///
/// The corpus and classifier are injected once and never mutated, so an
/// `Analyzer` can be cloned freely across tasks.
#[derive(Clone)]
pub struct Analyzer {
    corpus: Arc<Corpus>,
    classifier: Arc<dyn SentimentClassifier>,
}

impl Analyzer {
    /// Create an analyzer over a loaded corpus.
    pub fn new(corpus: Corpus, classifier: impl SentimentClassifier + 'static) -> Self {
        Self {
            corpus: Arc::new(corpus),
            classifier: Arc::new(classifier),
        }
    }

    /// Create an analyzer from already shared parts.
    pub fn from_shared(corpus: Arc<Corpus>, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self { corpus, classifier }
    }

    /// The corpus reviews are drawn from.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Name of the classifier backend.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Classify a review chosen uniformly at random.
    pub async fn analyze_random(&self, credential: Option<&str>) -> Result<Analysis> {
        let review = self.corpus.random().clone();
        self.analyze_review(review, credential).await
    }

    /// Classify a random review using the given generator.
    pub async fn analyze_with(
        &self,
        rng: &mut fastrand::Rng,
        credential: Option<&str>,
    ) -> Result<Analysis> {
        let review = self.corpus.choose(rng).clone();
        self.analyze_review(review, credential).await
    }

    /// Classify a specific review.
    pub async fn analyze_review(&self, review: Review, credential: Option<&str>) -> Result<Analysis> {
        let payload = self.classifier.classify_raw(review.as_str(), credential).await?;
        let sentiment = normalize(&payload);
        let candidate = payload.top_candidate();

        Ok(Analysis {
            review,
            sentiment,
            label: candidate.and_then(|c| c.label).map(str::to_string),
            score: candidate.and_then(|c| c.score),
        })
    }
}
