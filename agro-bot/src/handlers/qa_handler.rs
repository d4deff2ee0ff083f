//! Student mode: answers plain-text questions through the Q&A pipeline.

use async_trait::async_trait;
use tracing::instrument;

use crate::core::{Handler, HandlerResponse, Message, Mode, Result};
use crate::pipeline::QaPipeline;
use crate::session::Session;

pub struct QaHandler {
    pipeline: QaPipeline,
}

impl QaHandler {
    pub fn new(pipeline: QaPipeline) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Handler for QaHandler {
    #[instrument(skip(self, session, message))]
    async fn handle(&self, session: &mut Session, message: &Message) -> Result<HandlerResponse> {
        if session.mode() != Mode::QaChat || message.command().is_some() {
            return Ok(HandlerResponse::Ignore);
        }
        let answer = self.pipeline.ask(message.text()).await?;
        Ok(HandlerResponse::Reply(answer))
    }
}
