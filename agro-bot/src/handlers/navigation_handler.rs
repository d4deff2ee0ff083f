//! Navigation commands: mode switches, `/clear`, `/history`, `/help`, `/quit`.

use async_trait::async_trait;
use prompt::format_transcript;
use tracing::{info, instrument, warn};

use crate::core::{Command, Handler, HandlerError, HandlerResponse, Message, Mode, Result};
use crate::session::Session;

pub const HELP_TEXT: &str = "Commands:
  /qa, /student   ask questions about the MSCE Agriculture syllabus
  /qg, /tutor     paste a passage (at least 5 words) to get a quiz question
  /clear          start the conversation over
  /history        show the conversation so far
  /help           show this list
  /quit           leave";

/// Handles command messages and replies; plain text passes through untouched.
pub struct NavigationHandler {
    cleared_greeting: String,
}

impl NavigationHandler {
    pub fn new(cleared_greeting: impl Into<String>) -> Self {
        Self {
            cleared_greeting: cleared_greeting.into(),
        }
    }

    fn mode_banner(mode: Mode) -> &'static str {
        match mode {
            Mode::QaChat => "Student mode: ask a question about the syllabus.",
            Mode::QgMode => {
                "Tutor mode: paste a passage (at least 5 words) and I will write a question about it."
            }
        }
    }
}

#[async_trait]
impl Handler for NavigationHandler {
    #[instrument(skip(self, session, message))]
    async fn handle(&self, session: &mut Session, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = message.command() else {
            return Ok(HandlerResponse::Continue);
        };

        let response = match command {
            Command::SwitchMode(mode) => {
                session.set_mode(mode);
                info!(session_id = %session.id(), mode = %mode, "Mode switched");
                HandlerResponse::Reply(Self::mode_banner(mode).to_string())
            }
            Command::Clear => {
                session.log_mut().reset_to_greeting(self.cleared_greeting.clone());
                info!(session_id = %session.id(), "Conversation cleared");
                HandlerResponse::Reply(self.cleared_greeting.clone())
            }
            Command::History => {
                HandlerResponse::Reply(format_transcript(session.log().all()).trim_end().to_string())
            }
            Command::Help => HandlerResponse::Reply(HELP_TEXT.to_string()),
            Command::Quit => HandlerResponse::Stop,
            Command::Unknown(name) => {
                warn!(session_id = %session.id(), command = %name, "Unknown command");
                HandlerResponse::Reply(format!(
                    "{}. Type /help for the list of commands.",
                    HandlerError::UnknownCommand(name)
                ))
            }
        };
        Ok(response)
    }
}
