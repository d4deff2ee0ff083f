//! Core types: message, mode, command, handler response, and Handler trait.
//!
//! One file per main type.

mod command;
mod handler;
mod message;
mod mode;
mod response;

pub use command::Command;
pub use handler::Handler;
pub use message::Message;
pub use mode::Mode;
pub use response::HandlerResponse;
