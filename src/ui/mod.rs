//! Terminal output for the `tzmemo` binary
//!
//! Uses `cliclack` styling in interactive terminals and plain prefixed lines
//! everywhere else, so output stays greppable in CI and pipes.

mod context;
mod output;
mod theme;

pub use context::UiContext;
pub use output::{
    key_value, outro_success, section, step_error_detail, step_resolved, step_warn_hint,
};
pub use theme::{init_theme, TzMemoTheme};
