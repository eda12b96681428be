//! Review corpus loading and random selection.

mod loader;
mod source;

pub use loader::{CorpusLoader, LoaderConfig};
pub use source::{Corpus, CorpusMetadata, Review};
