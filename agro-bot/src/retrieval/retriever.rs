//! Keyword-overlap retriever.
//!
//! Scores each corpus entry by the number of significant question tokens its own question
//! shares, and returns the context of the strictly best entry when the score reaches the
//! minimum. Ties keep the earliest entry.

use std::collections::HashSet;

use tracing::debug;

use super::stop_words::{default_stop_words, DEFAULT_MIN_SCORE};
use crate::corpus::{Corpus, CorpusEntry};

/// Outcome of a retrieval: the matched context, or no sufficiently relevant entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retrieval {
    Matched(String),
    NoMatch,
}

impl Retrieval {
    pub fn context(&self) -> Option<&str> {
        match self {
            Retrieval::Matched(context) => Some(context),
            Retrieval::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Retrieval::Matched(_))
    }

    /// The matched context, or `question` itself when nothing matched.
    pub fn context_or<'a>(&'a self, question: &'a str) -> &'a str {
        self.context().unwrap_or(question)
    }
}

/// Lower-cases, trims, splits on whitespace, and trims punctuation off each token's edges.
/// Tokens that are pure punctuation are dropped.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Retriever configured with a stop-word set and a minimum shared-token score.
#[derive(Debug, Clone)]
pub struct KeywordRetriever {
    stop_words: HashSet<String>,
    min_score: usize,
}

impl Default for KeywordRetriever {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl KeywordRetriever {
    /// Stop words are lower-cased so they compare against normalized tokens.
    pub fn new<I, S>(stop_words: I, min_score: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            min_score,
        }
    }

    pub fn min_score(&self) -> usize {
        self.min_score
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Question tokens minus stop words.
    pub fn significant_tokens(&self, question: &str) -> HashSet<String> {
        let mut tokens = tokenize(question);
        tokens.retain(|t| !self.stop_words.contains(t));
        tokens
    }

    /// Finds the context for `question`.
    ///
    /// Corpus questions are tokenized the same way but keep their stop words. The entry with
    /// the strictly highest overlap wins (first one on ties); below `min_score` nothing matches.
    pub fn retrieve(&self, question: &str, corpus: &Corpus) -> Retrieval {
        if corpus.is_empty() {
            debug!("Corpus empty, no context");
            return Retrieval::NoMatch;
        }

        let significant = self.significant_tokens(question);
        let mut best: Option<&CorpusEntry> = None;
        let mut max_score = 0;

        for entry in corpus.entries() {
            let entry_tokens = tokenize(&entry.question);
            let score = significant.intersection(&entry_tokens).count();
            if score > max_score {
                max_score = score;
                best = Some(entry);
            }
        }

        match best {
            Some(entry) if max_score >= self.min_score => {
                debug!(
                    score = max_score,
                    corpus_question = %entry.question,
                    "Context matched"
                );
                Retrieval::Matched(entry.context.clone())
            }
            _ => {
                debug!(
                    score = max_score,
                    min_score = self.min_score,
                    "No corpus entry reached the minimum score"
                );
                Retrieval::NoMatch
            }
        }
    }
}
