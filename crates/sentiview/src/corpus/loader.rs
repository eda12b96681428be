//! TSV review loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CorpusLoadError, Result};
use super::source::{Corpus, CorpusMetadata, Review};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Header name of the column holding review text.
    pub text_column: String,
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            text_column: "text".to_string(),
            delimiter: b'\t',
            quote: b'"',
        }
    }
}

impl LoaderConfig {
    /// Use a different text column.
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    /// Use a different delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Loads a review corpus from delimited text.
pub struct CorpusLoader {
    config: LoaderConfig,
}

impl CorpusLoader {
    /// Create a loader for tab-separated files with a `text` column.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load from a local path or an `http(s)://` URL.
    pub async fn load(&self, source: &str) -> Result<Corpus> {
        if source.starts_with("http://") || source.starts_with("https://") {
            self.load_url(source).await
        } else {
            self.load_file(source)
        }
    }

    /// Load a corpus from a file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Corpus> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| CorpusLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| CorpusLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(self.parse_bytes(&contents, &path.display().to_string())?)
    }

    /// Download and load a corpus.
    pub async fn load_url(&self, url: &str) -> Result<Corpus> {
        let response = reqwest::get(url)
            .await
            .map_err(|e| CorpusLoadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorpusLoadError::Fetch(format!("{} returned {}", url, status)).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CorpusLoadError::Fetch(e.to_string()))?;

        Ok(self.parse_bytes(&bytes, url)?)
    }

    /// Load a corpus from in-memory text.
    pub fn load_str(&self, text: &str) -> Result<Corpus> {
        Ok(self.parse_bytes(text.as_bytes(), "memory")?)
    }

    fn parse_bytes(&self, bytes: &[u8], source: &str) -> std::result::Result<Corpus, CorpusLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let column = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == self.config.text_column)
            .ok_or_else(|| CorpusLoadError::MissingTextColumn(self.config.text_column.clone()))?;

        let mut row_count = 0;
        let mut reviews = Vec::new();

        for result in reader.records() {
            let record = result?;
            row_count += 1;

            // Short rows have no text field
            if let Some(review) = record.get(column).and_then(Review::new) {
                reviews.push(review);
            }
        }

        let metadata = CorpusMetadata::new(source, bytes, row_count, reviews.len());
        Corpus::new(reviews, metadata)
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}
