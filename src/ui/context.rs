//! Output context: styled terminal output or plain lines

use std::io::IsTerminal;

/// Decides whether output may use cliclack styling
#[derive(Debug, Clone)]
pub struct UiContext {
    fancy: bool,
}

impl UiContext {
    /// Styled output only when stdout is a terminal outside CI
    pub fn detect() -> Self {
        let fancy = std::io::stdout().is_terminal()
            && std::env::var_os("CI").is_none()
            && std::env::var_os("NO_COLOR").is_none();
        Self { fancy }
    }

    /// Plain output (for tests, pipes and JSON mode)
    pub fn plain() -> Self {
        Self { fancy: false }
    }

    pub fn use_fancy_output(&self) -> bool {
        self.fancy
    }
}
