//! Which pipeline the session currently exposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-wide pipeline selection. Student Q&A chat is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Student mode: free-text questions answered from the syllabus corpus.
    #[default]
    #[serde(rename = "QA_CHAT")]
    QaChat,
    /// Tutor mode: a quiz question is generated from pasted source text.
    #[serde(rename = "QG_MODE")]
    QgMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::QaChat => write!(f, "QA_CHAT"),
            Mode::QgMode => write!(f, "QG_MODE"),
        }
    }
}
