//! Hugging Face inference API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::{RemoteError, Result, SentiviewError};

use super::classifier::{effective_credential, SentimentClassifier};
use super::label::RawApiResponse;

/// Hosted sentiment model endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/siebert/sentiment-roberta-large-english";

/// Configuration for the inference client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Inference endpoint URL.
    pub endpoint: String,
    /// Request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Point the client at another endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Request body sent to the endpoint.
#[derive(Debug, Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

/// Remote sentiment classifier.
///
/// Performs exactly one POST per call. Nothing is retried; a 503 while the
/// model warms up is reported as [`RemoteError::ModelLoading`] and left to
/// the caller.
pub struct SentimentClient {
    client: Client,
    endpoint: Url,
    config: ClientConfig,
}

impl SentimentClient {
    /// Create a client for the default endpoint.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            SentiviewError::Config(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SentiviewError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// Get the configuration for this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build headers for a request. Authorization is omitted for anonymous calls.
    fn build_headers(credential: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = effective_credential(credential) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| SentiviewError::Config(format!("Invalid API token: {}", e)))?,
            );
        }
        Ok(headers)
    }
}

#[async_trait]
impl SentimentClassifier for SentimentClient {
    async fn classify_raw(&self, text: &str, credential: Option<&str>) -> Result<RawApiResponse> {
        if text.trim().is_empty() {
            return Err(SentiviewError::InvalidInput("review text is empty".to_string()));
        }

        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(Self::build_headers(credential)?)
            .json(&ClassificationRequest { inputs: text })
            .send()
            .await
            .map_err(SentiviewError::Transport)?;

        let status = response.status();
        if let Some(err) =
            RemoteError::from_status(status.as_u16(), status.canonical_reason().unwrap_or(""))
        {
            return Err(err.into());
        }

        let body = response.bytes().await.map_err(SentiviewError::Transport)?;
        Ok(RawApiResponse::from_slice(&body))
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
