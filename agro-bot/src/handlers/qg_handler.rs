//! Tutor mode: turns pasted source text into a quiz question.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Mode, Result};
use crate::pipeline::{validate_source_text, QuestionGenerator, SHORT_SOURCE_WARNING};
use crate::session::Session;

/// Rejects sources under five words with a warning reply; the generator is not called and
/// the session is left untouched.
pub struct QgHandler {
    generator: QuestionGenerator,
}

impl QgHandler {
    pub fn new(generator: QuestionGenerator) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Handler for QgHandler {
    #[instrument(skip(self, session, message))]
    async fn handle(&self, session: &mut Session, message: &Message) -> Result<HandlerResponse> {
        if session.mode() != Mode::QgMode || message.command().is_some() {
            return Ok(HandlerResponse::Ignore);
        }
        let source = message.text();
        if let Err(e) = validate_source_text(source) {
            info!(session_id = %session.id(), reason = %e, "Source text rejected");
            return Ok(HandlerResponse::Reply(SHORT_SOURCE_WARNING.to_string()));
        }
        let question = self.generator.generate_question(source).await?;
        Ok(HandlerResponse::Reply(question))
    }
}
