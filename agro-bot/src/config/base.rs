//! Base config: logging, corpus location, session greetings. Loaded from env.

use anyhow::Result;
use std::env;

/// Default corpus file, relative to the working directory.
pub const DEFAULT_CORPUS_PATH: &str = "msce_agriculture_qa.json";

pub const DEFAULT_SESSION_GREETING: &str =
    "Welcome! Ask me a question about soil degradation, livestock, or farm mechanization.";

pub const DEFAULT_CLEARED_GREETING: &str = "Conversation cleared. Ready for new questions.";

/// Base config: logging, corpus, and greeting texts only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// Log file path
    pub log_file: String,
    /// CORPUS_PATH: JSON array of `{question, context}` records
    pub corpus_path: String,
    /// First assistant turn of every new session
    pub session_greeting: String,
    /// Single assistant turn left after `/clear`
    pub cleared_greeting: String,
}

impl BaseConfig {
    /// Load from environment variables. Every field has a default.
    pub fn load() -> Result<Self> {
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/agro-bot.log".to_string());
        let corpus_path =
            env::var("CORPUS_PATH").unwrap_or_else(|_| DEFAULT_CORPUS_PATH.to_string());
        let session_greeting = env::var("SESSION_GREETING")
            .unwrap_or_else(|_| DEFAULT_SESSION_GREETING.to_string());
        let cleared_greeting = env::var("CLEARED_GREETING")
            .unwrap_or_else(|_| DEFAULT_CLEARED_GREETING.to_string());

        Ok(Self {
            log_file,
            corpus_path,
            session_greeting,
            cleared_greeting,
        })
    }

    /// Validate config (paths and greetings must not be blank).
    pub fn validate(&self) -> Result<()> {
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is set but empty");
        }
        if self.corpus_path.trim().is_empty() {
            anyhow::bail!("CORPUS_PATH is set but empty");
        }
        if self.session_greeting.trim().is_empty() || self.cleared_greeting.trim().is_empty() {
            anyhow::bail!("SESSION_GREETING / CLEARED_GREETING must not be empty");
        }
        Ok(())
    }
}
