//! Question generator: turns a source paragraph into a quiz question.

use std::sync::Arc;

use llm_client::{strip_special_tokens, GenerationClient, GenerationParams};
use prompt::format_question_prompt;
use tracing::{info, instrument};

use crate::core::{AgroError, HandlerError, Result};

/// Fewest whitespace-separated words a source text needs before a question is generated.
pub const MIN_SOURCE_WORDS: usize = 5;

/// Reply sent instead of a generated question when the source text is too short.
pub const SHORT_SOURCE_WARNING: &str =
    "Please enter a longer text snippet (at least 5 words) to generate a meaningful question.";

/// Checks that `source_text` has at least [`MIN_SOURCE_WORDS`] words.
pub fn validate_source_text(source_text: &str) -> std::result::Result<(), HandlerError> {
    let words = source_text.split_whitespace().count();
    if words < MIN_SOURCE_WORDS {
        return Err(HandlerError::SourceTooShort {
            words,
            min: MIN_SOURCE_WORDS,
        });
    }
    Ok(())
}

/// Generates one question whose answer is the given source text.
///
/// The minimum-length check ([`validate_source_text`]) belongs to the caller.
#[derive(Clone)]
pub struct QuestionGenerator {
    client: Arc<dyn GenerationClient>,
}

impl QuestionGenerator {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, source_text))]
    pub async fn generate_question(&self, source_text: &str) -> Result<String> {
        let prompt = format_question_prompt(source_text);
        info!(source_len = source_text.len(), "step: question generation started");
        let raw = self
            .client
            .generate(&prompt, &GenerationParams::question())
            .await
            .map_err(AgroError::generation)?;
        let question = strip_special_tokens(&raw);
        info!(question_len = question.len(), "step: question generation done");
        Ok(question)
    }
}
