//! Default stop-word set excluded from question-side scoring.
//!
//! Besides function words it holds a few domain terms (and the misspelling `agoforstry`)
//! that appear in so many corpus questions that a match on them says nothing. The set is
//! data: `RETRIEVAL_STOP_WORDS` replaces it wholesale.

use std::collections::HashSet;

/// Default stop words.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "what",
    "is",
    "a",
    "the",
    "of",
    "and",
    "or",
    "do",
    "does",
    "are",
    "in",
    "can",
    "?",
    "types",
    "re",
    "define",
    "agoforstry",
    "agroforestry",
    "livestock",
];

/// Minimum number of shared significant tokens for a corpus entry to count as a match.
pub const DEFAULT_MIN_SCORE: usize = 2;

/// [`DEFAULT_STOP_WORDS`] as an owned set.
pub fn default_stop_words() -> HashSet<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}
