//! Mode router: holds the session's current [`Mode`].

use crate::core::Mode;

/// Pure state holder; starts at [`Mode::QaChat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeRouter {
    mode: Mode,
}

impl ModeRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Mode {
        self.mode
    }

    pub fn set(&mut self, mode: Mode) {
        self.mode = mode;
    }
}
