//! Inbound user message for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::command::Command;

/// A single line of user input addressed to one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub session_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a message with a fresh id and the current timestamp.
    pub fn new(session_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Navigation command carried by this message, if it is one (`/qa`, `/clear`, ...).
    pub fn command(&self) -> Option<Command> {
        Command::parse(&self.content)
    }

    /// Content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.content.trim()
    }
}
