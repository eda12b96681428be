//! Serve command - open the web page for interactive analysis.

use colored::Colorize;

use super::load_corpus;
use crate::cli::{ClassifierArgs, CorpusArgs};
use crate::server::{app, state::AppState};

pub fn run(
    corpus_args: CorpusArgs,
    port: u16,
    no_open: bool,
    classifier_args: ClassifierArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = classifier_args.build()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        // A failed load still serves the page; the analyze button stays disabled
        let state = match load_corpus(&corpus_args, verbose).await {
            Ok(corpus) => AppState::ready(corpus, classifier, classifier_args.credential()),
            Err(e) => {
                eprintln!("{} {}", "Warning:".yellow(), e);
                AppState::failed(e.to_string())
            }
        };

        // Print server info
        let url = format!("http://localhost:{}", port);
        println!();
        println!(
            "{} {}",
            "Starting Sentiview at".cyan().bold(),
            url.white().bold()
        );
        println!();
        println!("  Reviews: {}", corpus_args.file);
        println!("  Classifier: {}", classifier_args_label(&classifier_args));
        println!();
        println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
        println!();

        // Open browser if requested
        if !no_open {
            if let Err(e) = open::that(&url) {
                eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
            }
        }

        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}

fn classifier_args_label(args: &ClassifierArgs) -> String {
    if args.mock {
        "mock (offline)".to_string()
    } else {
        args.endpoint.clone()
    }
}
