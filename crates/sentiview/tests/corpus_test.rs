//! Integration tests for corpus loading.

use std::io::Write;

use axum::{http::StatusCode, routing::get, Router};
use tempfile::NamedTempFile;

use sentiview::{CorpusLoadError, CorpusLoader, SentiviewError};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// Serve `body` with `status` at `/reviews.tsv` and return the URL.
async fn serve_tsv(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/reviews.tsv", get(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/reviews.tsv", addr)
}

// =============================================================================
// File Loading
// =============================================================================

#[test]
fn test_load_file_trims_and_filters() {
    let file = create_test_file("text\tother\n\"  good movie  \"\tx\n\"\"\ty\n");

    let corpus = CorpusLoader::new()
        .load_file(file.path())
        .expect("Load failed");

    let texts: Vec<&str> = corpus.reviews().iter().map(|r| r.as_str()).collect();
    assert_eq!(texts, vec!["good movie"]);
    assert_eq!(corpus.metadata().row_count, 2);
    assert_eq!(corpus.metadata().review_count, 1);
    assert!(corpus.metadata().source.ends_with(
        &file.path().file_name().unwrap().to_string_lossy().to_string()
    ));
}

#[test]
fn test_load_file_keeps_order() {
    let file = create_test_file(
        "text\tlabel\n\
         First review\t1\n\
         Second review\t0\n\
         \n\
         Third review\t1\n",
    );

    let corpus = CorpusLoader::new().load_file(file.path()).unwrap();
    let texts: Vec<&str> = corpus.reviews().iter().map(|r| r.as_str()).collect();
    assert_eq!(texts, vec!["First review", "Second review", "Third review"]);
}

#[test]
fn test_load_file_with_crlf() {
    let file = create_test_file("text\tother\r\nfine film \tx\r\n");
    let corpus = CorpusLoader::new().load_file(file.path()).unwrap();
    assert_eq!(corpus.get(0).unwrap().as_str(), "fine film");
}

#[test]
fn test_hash_is_stable() {
    let content = "text\nsame\n";
    let a = create_test_file(content);
    let b = create_test_file(content);

    let loader = CorpusLoader::new();
    let first = loader.load_file(a.path()).unwrap();
    let second = loader.load_file(b.path()).unwrap();
    assert_eq!(first.metadata().hash, second.metadata().hash);
    assert_eq!(first.metadata().size_bytes, content.len() as u64);
}

#[test]
fn test_load_empty_file() {
    let file = create_test_file("");
    let err = CorpusLoader::new().load_file(file.path()).unwrap_err();
    assert!(err.is_corpus_error());
}

#[test]
fn test_all_rows_blank() {
    let file = create_test_file("text\tother\n   \ta\n\"\"\tb\n");
    let err = CorpusLoader::new().load_file(file.path()).unwrap_err();
    assert!(matches!(err, SentiviewError::Corpus(CorpusLoadError::Empty(_))));
}

// =============================================================================
// Source Dispatch
// =============================================================================

#[tokio::test]
async fn test_load_dispatches_to_file() {
    let file = create_test_file("text\nfrom disk\n");
    let corpus = CorpusLoader::new()
        .load(&file.path().to_string_lossy())
        .await
        .unwrap();
    assert_eq!(corpus.get(0).unwrap().as_str(), "from disk");
}

#[tokio::test]
async fn test_load_from_url() {
    let url = serve_tsv(StatusCode::OK, "id\ttext\n1\t  remote review \n2\t\n").await;

    let corpus = CorpusLoader::new().load(&url).await.unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.get(0).unwrap().as_str(), "remote review");
    assert_eq!(corpus.metadata().source, url);
}

#[tokio::test]
async fn test_load_from_url_not_found() {
    let url = serve_tsv(StatusCode::NOT_FOUND, "missing").await;

    let err = CorpusLoader::new().load_url(&url).await.unwrap_err();
    assert!(matches!(err, SentiviewError::Corpus(CorpusLoadError::Fetch(_))));
}

#[test]
fn test_bundled_sample() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/reviews_test.tsv");
    let corpus = CorpusLoader::new().load_file(path).unwrap();

    assert_eq!(corpus.metadata().row_count, 6);
    assert_eq!(corpus.len(), 5);
    assert_eq!(
        corpus.get(1).unwrap().as_str(),
        "A dull, boring plot and a waste of two hours."
    );
}
