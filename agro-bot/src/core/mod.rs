//! Core types and traits: Handler, Message, Mode, Command, HandlerResponse, error, logger.
//! Transport-agnostic; the REPL and one-shot CLI both drive the same types.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{AgroError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Command, Handler, HandlerResponse, Message, Mode};
