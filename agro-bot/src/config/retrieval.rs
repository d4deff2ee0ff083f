//! Retrieval config: stop words and minimum overlap score.

use anyhow::{Context, Result};
use std::env;

use crate::retrieval::{default_stop_words, KeywordRetriever, DEFAULT_MIN_SCORE};

#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// RETRIEVAL_STOP_WORDS (comma-separated); replaces the default set when set
    pub stop_words: Vec<String>,
    /// RETRIEVAL_MIN_SCORE
    pub min_score: usize,
}

impl RetrievalConfig {
    pub fn load() -> Result<Self> {
        let stop_words = match env::var("RETRIEVAL_STOP_WORDS") {
            Ok(raw) => raw
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            Err(_) => {
                let mut words: Vec<String> = default_stop_words().into_iter().collect();
                words.sort();
                words
            }
        };
        let min_score = match env::var("RETRIEVAL_MIN_SCORE") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RETRIEVAL_MIN_SCORE is not a number: {}", raw))?,
            Err(_) => DEFAULT_MIN_SCORE,
        };
        Ok(Self {
            stop_words,
            min_score,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_score == 0 {
            anyhow::bail!("RETRIEVAL_MIN_SCORE must be at least 1");
        }
        Ok(())
    }

    /// Retriever configured from these settings.
    pub fn retriever(&self) -> KeywordRetriever {
        KeywordRetriever::new(&self.stop_words, self.min_score)
    }
}
