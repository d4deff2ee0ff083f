//! Logs each message in before() and the response in after(). Blank input stops the chain.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::session::Session;

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, session, message))]
    async fn before(&self, session: &mut Session, message: &Message) -> Result<bool> {
        if message.text().is_empty() {
            debug!(session_id = %session.id(), "Blank message ignored");
            return Ok(false);
        }
        info!(
            session_id = %session.id(),
            mode = %session.mode(),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, session, message, response))]
    async fn after(
        &self,
        session: &mut Session,
        message: &Message,
        response: &HandlerResponse,
    ) -> Result<()> {
        debug!(
            session_id = %session.id(),
            message_id = ?message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
