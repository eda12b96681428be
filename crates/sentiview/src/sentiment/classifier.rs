//! Classifier trait shared by the remote client and the offline mock.

use async_trait::async_trait;

use crate::error::Result;

use super::label::{normalize, RawApiResponse, Sentiment};

/// A backend that turns review text into a sentiment payload.
///
/// Implementations must be thread-safe (Send + Sync) so one instance can
/// serve every request of the web UI.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Perform one classification call and return the raw payload.
    ///
    /// # Arguments
    /// * `text` - Non-empty review text
    /// * `credential` - Optional bearer token; blank means anonymous
    async fn classify_raw(&self, text: &str, credential: Option<&str>) -> Result<RawApiResponse>;

    /// Classify `text` and normalize the payload to a 3-way label.
    async fn classify(&self, text: &str, credential: Option<&str>) -> Result<Sentiment> {
        let payload = self.classify_raw(text, credential).await?;
        Ok(normalize(&payload))
    }

    /// Get the name of this classifier (for display).
    fn name(&self) -> &str;
}

/// Trim a credential, treating blank as absent.
pub fn effective_credential(credential: Option<&str>) -> Option<&str> {
    credential.map(str::trim).filter(|c| !c.is_empty())
}
