//! CLI command implementations.

pub mod analyze;
pub mod classify;
pub mod corpus;
pub mod serve;

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use sentiview::{
    ClientConfig, Corpus, CorpusLoader, LoaderConfig, MockClassifier, SentimentClassifier,
    SentimentClient,
};

use crate::cli::{ClassifierArgs, CorpusArgs};

/// Environment variable consulted when no `--token` is given.
pub const TOKEN_ENV: &str = "HF_API_TOKEN";

impl ClassifierArgs {
    /// Build the classifier backend these arguments describe.
    pub fn build(&self) -> sentiview::Result<Arc<dyn SentimentClassifier>> {
        if self.mock {
            return Ok(Arc::new(MockClassifier::new()));
        }

        let mut config = ClientConfig::default().with_endpoint(&self.endpoint);
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(Arc::new(SentimentClient::with_config(config)?))
    }

    /// Token from `--token`, falling back to the environment.
    pub fn credential(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.trim().is_empty())
    }
}

/// Load the corpus described by `args`.
pub async fn load_corpus(args: &CorpusArgs, verbose: bool) -> sentiview::Result<Corpus> {
    if verbose {
        println!("{} {}", "Loading reviews from".cyan(), args.file.white());
    }

    let loader = CorpusLoader::with_config(LoaderConfig::default().with_text_column(&args.column));
    let corpus = loader.load(&args.file).await?;

    if verbose {
        let meta = corpus.metadata();
        println!(
            "Loaded {} reviews ({} rows, {} dropped)",
            meta.review_count.to_string().white().bold(),
            meta.row_count,
            meta.dropped_count()
        );
    }

    Ok(corpus)
}
