//! Handler trait.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse};
use crate::session::Session;

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
///
/// Every phase receives the session the message belongs to; the chain holds that session
/// exclusively for the whole dispatch.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(
        &self,
        _session: &mut Session,
        _message: &Message,
    ) -> crate::core::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(
        &self,
        _session: &mut Session,
        _message: &Message,
    ) -> crate::core::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _session: &mut Session,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::core::error::Result<()> {
        Ok(())
    }
}
