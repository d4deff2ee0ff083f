//! Corpus loader: reads the JSON Q&A dataset once at startup.
//!
//! Source format is a JSON array of records, each with at least string fields `question`
//! and `context`. A missing or malformed source degrades to an empty corpus with a warning;
//! it never stops the assistant.

use std::path::Path;

use tracing::{info, instrument, warn};

use super::store::{Corpus, CorpusEntry};
use crate::core::{AgroError, Result};

/// Parses the dataset JSON. Fails if the text is not an array of `{question, context}` records.
pub fn parse_corpus(json: &str) -> Result<Corpus> {
    let entries: Vec<CorpusEntry> =
        serde_json::from_str(json).map_err(|e| AgroError::Corpus(e.to_string()))?;
    Ok(Corpus::new(entries))
}

/// Loads the corpus from `path`. Missing or unparseable files yield an empty corpus.
#[instrument]
pub async fn load_corpus(path: &Path) -> Corpus {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Corpus file not readable; answering in syllabus-refusal mode"
            );
            return Corpus::empty();
        }
    };

    match parse_corpus(&text) {
        Ok(corpus) => {
            if corpus.is_empty() {
                warn!(path = %path.display(), "Corpus file has no entries");
            } else {
                info!(path = %path.display(), entries = corpus.len(), "Corpus loaded");
            }
            corpus
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Corpus file malformed; answering in syllabus-refusal mode"
            );
            Corpus::empty()
        }
    }
}
