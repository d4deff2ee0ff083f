//! # MSCE Agriculture assistant
//!
//! Retrieval-augmented Q&A over the syllabus corpus (student mode) and quiz question
//! generation from pasted text (tutor mode), both backed by a hosted text2text model.
//! Sessions are driven through a handler chain; the binary hosts one session in a terminal REPL.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod corpus;
pub mod handlers;
pub mod pipeline;
pub mod repl;
pub mod retrieval;
pub mod runner;
pub mod session;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, AgroError, Command, Handler, HandlerError, HandlerResponse, Message, Mode,
    Result,
};

pub use chain::HandlerChain;
pub use components::{build_components, build_handler_chain, AgroComponents};
pub use config::BotConfig;
pub use corpus::{Corpus, CorpusEntry};
pub use handlers::{ConversationHandler, LoggingHandler, NavigationHandler, QaHandler, QgHandler};
pub use pipeline::{AnswerGenerator, QaPipeline, QuestionGenerator};
pub use retrieval::{KeywordRetriever, Retrieval};
pub use runner::{ask_once, generate_question_once, run_bot, AgroBot};
pub use session::{ConversationLog, Session, SessionStore};
