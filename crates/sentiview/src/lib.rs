//! Sentiview: random review sentiment analysis against a hosted model.
//!
//! Sentiview loads review texts from a tab-separated file, picks one at
//! random and asks a hosted sentiment model to classify it. The model's
//! loosely structured answer is normalized to one of three labels.
//!
//! # Core Principles
//!
//! - **Total normalization**: any payload maps to positive, negative or neutral
//! - **Classified failures**: HTTP rejections become matchable error kinds
//! - **No hidden state**: the corpus is an owned value, injected where needed
//!
//! # Example
//!
//! ```no_run
//! use sentiview::{Analyzer, CorpusLoader, SentimentClient};
//!
//! # async fn run() -> sentiview::Result<()> {
//! let corpus = CorpusLoader::new().load_file("reviews_test.tsv")?;
//! let analyzer = Analyzer::new(corpus, SentimentClient::new()?);
//!
//! let analysis = analyzer.analyze_random(None).await?;
//! println!("\"{}\" is {}", analysis.review, analysis.sentiment);
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod error;
pub mod sentiment;

mod analyzer;

pub use analyzer::{Analysis, Analyzer};
pub use corpus::{Corpus, CorpusLoader, CorpusMetadata, LoaderConfig, Review};
pub use error::{CorpusLoadError, RemoteError, Result, SentiviewError};
pub use sentiment::{
    normalize, ClientConfig, MockClassifier, RawApiResponse, Sentiment, SentimentClassifier,
    SentimentClient, DEFAULT_ENDPOINT,
};
