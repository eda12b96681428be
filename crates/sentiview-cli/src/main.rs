//! Sentiview CLI - sentiment of random reviews.

mod cli;
mod commands;
mod render;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            corpus,
            count,
            json,
            classifier,
        } => commands::analyze::run(corpus, count, json, classifier, cli.verbose),

        Commands::Classify {
            text,
            json,
            classifier,
        } => commands::classify::run(text, json, classifier, cli.verbose),

        Commands::Corpus { corpus, show, json } => {
            commands::corpus::run(corpus, show, json, cli.verbose)
        }

        Commands::Serve {
            corpus,
            port,
            no_open,
            classifier,
        } => commands::serve::run(corpus, port, no_open, classifier, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
