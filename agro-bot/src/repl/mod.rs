//! Terminal host: one interactive session over stdin/stdout.

mod runner;

pub use runner::{run_repl, run_session};
