//! # Conversation handler
//!
//! Records the Q&A exchange in the session's conversation log: the user turn in before(),
//! the assistant reply in after(). Commands and tutor-mode input are not recorded.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::{Handler, HandlerResponse, Message, Mode, Result};
use crate::session::{ChatMessage, Session};

/// Appends user and assistant turns for plain-text messages in [`Mode::QaChat`].
///
/// When generation fails the chain returns early and after() never runs, so the log keeps
/// the user turn without an assistant turn.
pub struct ConversationHandler;

impl ConversationHandler {
    fn records(session: &Session, message: &Message) -> bool {
        session.mode() == Mode::QaChat && message.command().is_none()
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, session, message))]
    async fn before(&self, session: &mut Session, message: &Message) -> Result<bool> {
        if Self::records(session, message) {
            session.log_mut().append(ChatMessage::user(message.text()));
            debug!(session_id = %session.id(), turns = session.log().len(), "User turn logged");
        }
        Ok(true)
    }

    #[instrument(skip(self, session, message, response))]
    async fn after(
        &self,
        session: &mut Session,
        message: &Message,
        response: &HandlerResponse,
    ) -> Result<()> {
        if !Self::records(session, message) {
            return Ok(());
        }
        if let Some(reply) = response.reply_text() {
            session.log_mut().append(ChatMessage::assistant(reply));
            debug!(session_id = %session.id(), turns = session.log().len(), "Assistant turn logged");
        }
        Ok(())
    }
}
