//! Sentiment classification against a hosted inference endpoint.
//!
//! The [`SentimentClient`] sends one review to the
//! `siebert/sentiment-roberta-large-english` model and classifies HTTP
//! rejections into [`RemoteError`](crate::RemoteError) kinds. The payload is
//! reduced to a [`Sentiment`] by [`normalize`], which never fails.
//!
//! # Example
//!
//! ```no_run
//! use sentiview::{SentimentClassifier, SentimentClient};
//!
//! # async fn run() -> sentiview::Result<()> {
//! let client = SentimentClient::new()?;
//! let sentiment = client.classify("A wonderful film", None).await?;
//! println!("{}", sentiment);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod client;
mod label;
mod mock;

pub use classifier::{effective_credential, SentimentClassifier};
pub use client::{ClientConfig, SentimentClient, DEFAULT_ENDPOINT};
pub use label::{
    normalize, Candidate, RawApiResponse, Sentiment, DECISION_THRESHOLD, NEGATIVE_LABEL,
    POSITIVE_LABEL,
};
pub use mock::MockClassifier;
