//! Review corpus and its load metadata.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CorpusLoadError;

/// A single review text, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Review(String);

impl Review {
    /// Trim `text` and wrap it. Returns `None` if nothing is left.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The review text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Review {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata about where a corpus came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusMetadata {
    /// File path, URL, or "memory".
    pub source: String,
    /// SHA-256 hash of the raw source bytes.
    pub hash: String,
    /// Source size in bytes.
    pub size_bytes: u64,
    /// Number of data rows read (excluding header).
    pub row_count: usize,
    /// Number of rows kept as reviews.
    pub review_count: usize,
    /// When the corpus was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl CorpusMetadata {
    /// Create metadata for freshly loaded source bytes.
    pub fn new(source: impl Into<String>, bytes: &[u8], row_count: usize, review_count: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        Self {
            source: source.into(),
            hash: format!("sha256:{:x}", hasher.finalize()),
            size_bytes: bytes.len() as u64,
            row_count,
            review_count,
            loaded_at: Utc::now(),
        }
    }

    /// Rows discarded because their text was empty or missing.
    pub fn dropped_count(&self) -> usize {
        self.row_count.saturating_sub(self.review_count)
    }
}

/// Ordered, non-empty collection of reviews.
///
/// Built once after a successful load and read-only afterwards; share it
/// behind an `Arc` when several tasks need it.
#[derive(Debug, Clone)]
pub struct Corpus {
    reviews: Vec<Review>,
    metadata: CorpusMetadata,
}

impl Corpus {
    /// Create a corpus, rejecting an empty review list.
    pub fn new(reviews: Vec<Review>, metadata: CorpusMetadata) -> Result<Self, CorpusLoadError> {
        if reviews.is_empty() {
            return Err(CorpusLoadError::Empty(metadata.source));
        }
        Ok(Self { reviews, metadata })
    }

    /// Build an in-memory corpus from raw texts, dropping blank ones.
    pub fn from_texts<I, S>(texts: I) -> Result<Self, CorpusLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = texts.into_iter().map(|s| s.as_ref().to_string()).collect();
        let reviews: Vec<Review> = raw.iter().filter_map(|t| Review::new(t)).collect();
        let metadata = CorpusMetadata::new("memory", raw.join("\n").as_bytes(), raw.len(), reviews.len());
        Self::new(reviews, metadata)
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Always false; a corpus holds at least one review.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// All reviews in source order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Review at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Review> {
        self.reviews.get(index)
    }

    /// Load metadata.
    pub fn metadata(&self) -> &CorpusMetadata {
        &self.metadata
    }

    /// Pick a review uniformly at random using the given generator.
    pub fn choose(&self, rng: &mut fastrand::Rng) -> &Review {
        &self.reviews[rng.usize(..self.reviews.len())]
    }

    /// Pick a review uniformly at random.
    pub fn random(&self) -> &Review {
        self.choose(&mut fastrand::Rng::new())
    }
}
