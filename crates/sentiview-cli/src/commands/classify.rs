//! Classify command - classify one piece of text.

use colored::Colorize;
use sentiview::{normalize, Analysis, Review, SentimentClassifier, SentiviewError};

use crate::cli::ClassifierArgs;
use crate::render;

pub fn run(
    text: String,
    json: bool,
    classifier_args: ClassifierArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let review = Review::new(&text)
        .ok_or_else(|| SentiviewError::InvalidInput("text is empty".to_string()))?;

    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let classifier = classifier_args.build()?;
        let credential = classifier_args.credential();

        if verbose && !json {
            println!("{} {}", "Classifying with".cyan(), classifier.name().white());
        }

        let payload = classifier
            .classify_raw(review.as_str(), credential.as_deref())
            .await?;
        let candidate = payload.top_candidate();
        let analysis = Analysis {
            review,
            sentiment: normalize(&payload),
            label: candidate.and_then(|c| c.label).map(str::to_string),
            score: candidate.and_then(|c| c.score),
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print!("{}", render::terminal(analysis.sentiment));
            if let (true, Some(label), Some(score)) = (verbose, &analysis.label, analysis.score) {
                print!("  ({} {:.4})", label, score);
            }
            println!();
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
