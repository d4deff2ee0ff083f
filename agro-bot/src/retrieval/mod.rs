//! # Retrieval module
//!
//! Keyword-overlap context retrieval over the syllabus corpus.

pub mod retriever;
pub mod stop_words;

pub use retriever::{tokenize, KeywordRetriever, Retrieval};
pub use stop_words::{default_stop_words, DEFAULT_MIN_SCORE, DEFAULT_STOP_WORDS};
