//! Navigation commands typed as `/name` lines.

use super::mode::Mode;

/// Explicit user actions that change session state instead of asking the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/qa`, `/student`, `/qg`, `/tutor`
    SwitchMode(Mode),
    /// `/clear`: reset the conversation log to a fresh greeting.
    Clear,
    /// `/history`: render the conversation log.
    History,
    /// `/help`
    Help,
    /// `/quit`, `/exit`
    Quit,
    /// Any other `/word`.
    Unknown(String),
}

impl Command {
    /// Parses a command line. Returns `None` when `input` is not a command (does not start with `/`).
    /// Only the first word counts; the name is case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let rest = input.strip_prefix('/')?;
        let name = rest.split_whitespace().next().unwrap_or("").to_lowercase();
        let cmd = match name.as_str() {
            "qa" | "student" => Command::SwitchMode(Mode::QaChat),
            "qg" | "tutor" => Command::SwitchMode(Mode::QgMode),
            "clear" => Command::Clear,
            "history" => Command::History,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(format!("/{}", name)),
        };
        Some(cmd)
    }
}
