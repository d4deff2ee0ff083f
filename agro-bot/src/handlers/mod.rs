//! Handler implementations: logging, conversation log, navigation commands, Q&A, question generation.
//!
//! Chain order is logging → conversation → navigation → QA → QG.

mod conversation_handler;
mod logging_handler;
mod navigation_handler;
mod qa_handler;
mod qg_handler;

pub use conversation_handler::ConversationHandler;
pub use logging_handler::LoggingHandler;
pub use navigation_handler::{NavigationHandler, HELP_TEXT};
pub use qa_handler::QaHandler;
pub use qg_handler::QgHandler;
