//! Answer generator: builds the answer prompt and calls the generation client.

use std::sync::Arc;

use llm_client::{strip_special_tokens, GenerationClient, GenerationParams};
use prompt::format_answer_prompt;
use tracing::{info, instrument};

use crate::core::{AgroError, Result};
use crate::retrieval::Retrieval;

/// Answers a question from its retrieved context. No retries; generation failures propagate.
#[derive(Clone)]
pub struct AnswerGenerator {
    client: Arc<dyn GenerationClient>,
}

impl AnswerGenerator {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Generates the answer for `question`.
    ///
    /// On [`Retrieval::NoMatch`] the prompt carries the syllabus-scope refusal notice as its
    /// context. Output has special tokens stripped.
    #[instrument(skip(self, retrieval))]
    pub async fn answer(&self, question: &str, retrieval: &Retrieval) -> Result<String> {
        let prompt = format_answer_prompt(question, retrieval.context());
        info!(
            matched = retrieval.is_match(),
            prompt_len = prompt.len(),
            "step: answer generation started"
        );
        let raw = self
            .client
            .generate(&prompt, &GenerationParams::answer())
            .await
            .map_err(AgroError::generation)?;
        let answer = strip_special_tokens(&raw);
        info!(answer_len = answer.len(), "step: answer generation done");
        Ok(answer)
    }
}
