//! Example: Classify random reviews from a TSV file.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path> [--mock]
//!
//! Example:
//!   cargo run --example analyze -- test_data/reviews_test.tsv --mock
//!
//! Set `HF_API_TOKEN` to call the hosted model with a token.

use std::env;

use sentiview::{Analyzer, CorpusLoader, MockClassifier, RemoteError, SentimentClient, SentiviewError};

#[tokio::main]
async fn main() -> sentiview::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path> [--mock]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- test_data/reviews_test.tsv --mock");
        std::process::exit(1);
    }

    let corpus = CorpusLoader::new().load(&args[1]).await?;
    let meta = corpus.metadata();
    println!("Loaded {} reviews from {} ({} rows dropped)", meta.review_count, meta.source, meta.dropped_count());
    println!();

    let analyzer = if args.iter().any(|a| a == "--mock") {
        Analyzer::new(corpus, MockClassifier::new())
    } else {
        Analyzer::new(corpus, SentimentClient::new()?)
    };
    let token = env::var("HF_API_TOKEN").ok();

    for _ in 0..3 {
        match analyzer.analyze_random(token.as_deref()).await {
            Ok(analysis) => println!("{:>8}  \"{}\"", analysis.sentiment, analysis.review),
            Err(SentiviewError::Remote(RemoteError::ModelLoading)) => {
                println!("Model is still loading; try again shortly.");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
