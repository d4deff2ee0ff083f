//! Error types for the assistant core.
//!
//! [`AgroError`] is the top-level error; [`HandlerError`] is used for per-request rejections.

use thiserror::Error;

/// Top-level error (config, corpus, generation, handler, IO).
#[derive(Error, Debug)]
pub enum AgroError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AgroError {
    /// Wraps a generation collaborator failure, keeping the full cause chain in the message.
    pub fn generation(err: anyhow::Error) -> Self {
        AgroError::Generation(format!("{:#}", err))
    }
}

/// Errors produced by handlers for a single request; session state is left untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Message has no text")]
    NoText,

    #[error("Source text too short: {words} words (need at least {min})")]
    SourceTooShort { words: usize, min: usize },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Result type for core operations; uses [`AgroError`].
pub type Result<T> = std::result::Result<T, AgroError>;
