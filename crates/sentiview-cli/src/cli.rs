//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use sentiview::DEFAULT_ENDPOINT;

/// Sentiview: sentiment of random reviews via a hosted model
#[derive(Parser)]
#[command(name = "sentiview")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify random reviews from a corpus
    Analyze {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Number of random reviews to analyze, one request at a time
        #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        classifier: ClassifierArgs,
    },

    /// Classify a single piece of text
    Classify {
        /// Text to classify
        #[arg(value_name = "TEXT")]
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        classifier: ClassifierArgs,
    },

    /// Load a corpus and show what was kept
    Corpus {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Print the first N reviews
        #[arg(long, value_name = "N")]
        show: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the web page with an "Analyze Random Review" button
    Serve {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Port for web server
        #[arg(short, long, default_value = "3142")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,

        #[command(flatten)]
        classifier: ClassifierArgs,
    },
}

/// Where reviews come from.
#[derive(Args, Clone, Debug)]
pub struct CorpusArgs {
    /// Path or http(s) URL of the reviews TSV
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Header of the column holding review text
    #[arg(long, default_value = "text")]
    pub column: String,
}

/// How reviews get classified.
#[derive(Args, Clone, Debug)]
pub struct ClassifierArgs {
    /// Hugging Face API token (default: $HF_API_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Use the offline keyword classifier instead of the hosted model
    #[arg(long)]
    pub mock: bool,

    /// Inference endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds (default: wait for the server)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
