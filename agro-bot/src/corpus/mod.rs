//! # Corpus module
//!
//! The fixed (question, context) reference pairs used for retrieval, and their loader.

pub mod loader;
pub mod store;

pub use loader::{load_corpus, parse_corpus};
pub use store::{Corpus, CorpusEntry};
