//! Assistant configuration: BaseConfig (log, corpus, greetings) + RetrievalConfig + generation
//! config from `llm-client`.

mod base;
mod bot_config;
mod retrieval;

#[cfg(test)]
mod tests;

pub use base::{BaseConfig, DEFAULT_CLEARED_GREETING, DEFAULT_CORPUS_PATH, DEFAULT_SESSION_GREETING};
pub use bot_config::BotConfig;
pub use retrieval::RetrievalConfig;
