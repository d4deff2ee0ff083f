//! Conversation log: append-only ordered turns, reset wholesale to a greeting.

pub use prompt::{ChatMessage, MessageRole};

/// One (role, content) turn in the conversation.
pub type ConversationTurn = ChatMessage;

/// Ordered turns of one session. Insertion order is display order.
///
/// Turns are never reordered or removed individually; [`ConversationLog::reset_to_greeting`]
/// replaces the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    /// Creates a log seeded with one assistant greeting turn.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatMessage::assistant(greeting)],
        }
    }

    /// Adds `turn` at the end.
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Discards every turn and leaves exactly one assistant turn carrying `message`.
    pub fn reset_to_greeting(&mut self, message: impl Into<String>) {
        self.turns.clear();
        self.turns.push(ChatMessage::assistant(message));
    }

    /// All turns in insertion order.
    pub fn all(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }
}
