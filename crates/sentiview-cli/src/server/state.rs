//! Application state for the web server.

use std::sync::Arc;

use sentiview::{Analyzer, Corpus, SentimentClassifier};

/// Shared application state.
///
/// Everything here is read-only after startup. The page itself keeps at most
/// one analyze request in flight by disabling its button.
#[derive(Clone)]
pub struct AppState {
    /// Analyzer over the loaded corpus, or the reason loading failed.
    pub analyzer: Result<Analyzer, String>,
    /// Token used when the page does not supply one.
    pub default_token: Option<String>,
}

impl AppState {
    /// State for a successfully loaded corpus.
    pub fn ready(
        corpus: Corpus,
        classifier: Arc<dyn SentimentClassifier>,
        default_token: Option<String>,
    ) -> Self {
        Self {
            analyzer: Ok(Analyzer::from_shared(Arc::new(corpus), classifier)),
            default_token,
        }
    }

    /// State for a corpus that failed to load.
    pub fn failed(reason: String) -> Self {
        Self {
            analyzer: Err(reason),
            default_token: None,
        }
    }

    /// Page token if non-blank, else the server default.
    pub fn credential<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        sentiview::sentiment::effective_credential(requested)
            .or_else(|| sentiview::sentiment::effective_credential(self.default_token.as_deref()))
    }
}
