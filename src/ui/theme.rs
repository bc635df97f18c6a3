//! cliclack theme

use cliclack::ThemeState;
use console::Style;

/// Green bars for resolved zones, red for failures
#[derive(Debug, Clone, Default)]
pub struct TzMemoTheme;

impl cliclack::Theme for TzMemoTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Active | ThemeState::Submit => Style::new().green(),
        }
    }
}

/// Install the theme for this process
pub fn init_theme() {
    cliclack::set_theme(TzMemoTheme);
}
