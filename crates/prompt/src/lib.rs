//! # Prompt
//!
//! Formats the text prompts sent to the syllabus sequence-to-sequence model, and renders
//! conversation turns as plain transcript lines.
//!
//! ## Format
//!
//! - **Answer**: `question: {question} context: {context}`; when retrieval found nothing the
//!   context slot carries [`REFUSAL_SCOPE_NOTICE`] instead.
//! - **Question generation**: `generate question: {source_text}`
//! - **Transcript**: one `User: ...` / `Assistant: ...` line per turn.
//!
//! ## External interactions
//!
//! - **Generation model**: Output is sent to the hosted text2text model as `inputs`.

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// Student / teacher input.
    User,
    /// Model output or bot notice.
    Assistant,
}

impl MessageRole {
    /// Transcript label for the role.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// A single conversation turn: role and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Context sent in place of a retrieved passage when the question did not match the syllabus corpus.
pub const REFUSAL_SCOPE_NOTICE: &str = "I can only answer questions related to the MSCE Agriculture syllabus. Please ask a specific question based on the provided materials.";

/// Prefix the model was fine-tuned on for question generation.
pub const QUESTION_GENERATION_PREFIX: &str = "generate question:";

/// Builds the answer prompt: `question: {question} context: {context}`.
///
/// `context` is `None` when retrieval found no matching corpus entry; the refusal notice is
/// used instead so the model is never handed the raw question as its own context.
pub fn format_answer_prompt(question: &str, context: Option<&str>) -> String {
    let context = context.unwrap_or(REFUSAL_SCOPE_NOTICE);
    format!("question: {} context: {}", question, context)
}

/// Builds the question-generation prompt: `generate question: {source_text}`.
pub fn format_question_prompt(source_text: &str) -> String {
    format!("{} {}", QUESTION_GENERATION_PREFIX, source_text)
}

/// Renders turns as transcript lines (`User: ...`, `Assistant: ...`), one per line.
pub fn format_transcript<'a, I>(turns: I) -> String
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let mut out = String::new();
    for turn in turns {
        out.push_str(turn.role.label());
        out.push_str(": ");
        out.push_str(&turn.content);
        out.push('\n');
    }
    out
}
