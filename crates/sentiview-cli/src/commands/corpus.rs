//! Corpus command - load a corpus and report what was kept.

use colored::Colorize;

use super::load_corpus;
use crate::cli::CorpusArgs;

pub fn run(
    corpus_args: CorpusArgs,
    show: Option<usize>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let corpus = runtime.block_on(load_corpus(&corpus_args, verbose && !json_output))?;
    let meta = corpus.metadata();
    let shown = show.unwrap_or(0).min(corpus.len());

    if json_output {
        let status = serde_json::json!({
            "metadata": meta,
            "dropped_count": meta.dropped_count(),
            "reviews": &corpus.reviews()[..shown],
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Corpus".cyan().bold(),
        meta.source.white()
    );
    println!();
    println!("  Reviews:  {}", meta.review_count.to_string().white().bold());
    println!("  Rows:     {}", meta.row_count);
    println!("  Dropped:  {}", meta.dropped_count().to_string().yellow());
    println!("  Size:     {} bytes", meta.size_bytes);
    println!("  Hash:     {}", meta.hash);
    println!("  Loaded:   {}", meta.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"));

    if shown > 0 {
        println!();
        for (i, review) in corpus.reviews().iter().take(shown).enumerate() {
            println!("  {:>4}  {}", i + 1, review);
        }
        if shown < corpus.len() {
            println!("  {}", format!("... {} more", corpus.len() - shown).dimmed());
        }
    }

    Ok(())
}
