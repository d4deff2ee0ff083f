//! # Session module
//!
//! Per-session state: the conversation log, the mode router, and the store that keeps
//! sessions isolated from each other by session id.

pub mod log;
pub mod mode;
pub mod store;

pub use log::{ChatMessage, ConversationLog, ConversationTurn, MessageRole};
pub use mode::ModeRouter;
pub use store::{Session, SessionStore};
