//! Analyze command - classify random reviews from a corpus.

use std::sync::Arc;

use colored::Colorize;
use sentiview::{Analysis, Analyzer, Sentiment, SentimentClassifier};

use super::load_corpus;
use crate::cli::{ClassifierArgs, CorpusArgs};
use crate::render;

pub fn run(
    corpus_args: CorpusArgs,
    count: u32,
    json: bool,
    classifier_args: ClassifierArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let corpus = load_corpus(&corpus_args, verbose && !json).await?;
        let classifier = classifier_args.build()?;
        let credential = classifier_args.credential();

        if verbose && !json {
            println!(
                "Classifier: {} ({})",
                classifier.name().white().bold(),
                if credential.is_some() { "token" } else { "anonymous" }
            );
        }

        let analyzer = Analyzer::from_shared(Arc::new(corpus), classifier);

        let mut analyses = Vec::new();
        let mut failures = 0;

        // One request in flight at a time
        for _ in 0..count {
            match analyzer.analyze_random(credential.as_deref()).await {
                Ok(analysis) => {
                    if !json {
                        print_analysis(&analysis, verbose);
                    }
                    analyses.push(analysis);
                }
                Err(e) => {
                    failures += 1;
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
            }
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&analyses)?);
        } else if count > 1 {
            print_summary(&analyses, failures);
        }

        if analyses.is_empty() {
            return Err(format!("All {} analyses failed", count).into());
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn print_analysis(analysis: &Analysis, verbose: bool) {
    println!();
    println!("  \"{}\"", analysis.review.as_str().italic());
    print!("  {}", render::terminal(analysis.sentiment));
    if verbose {
        if let (Some(label), Some(score)) = (&analysis.label, analysis.score) {
            print!("  ({} {:.4})", label, score);
        }
    }
    println!();
}

fn print_summary(analyses: &[Analysis], failures: usize) {
    let tally = |s: Sentiment| analyses.iter().filter(|a| a.sentiment == s).count();

    println!();
    println!(
        "Analyzed {} reviews ({} positive, {} negative, {} neutral, {} failed)",
        analyses.len().to_string().white().bold(),
        tally(Sentiment::Positive).to_string().green(),
        tally(Sentiment::Negative).to_string().red(),
        tally(Sentiment::Neutral).to_string().yellow(),
        failures.to_string().red()
    );
}
