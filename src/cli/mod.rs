//! Command-line interface for the `tzmemo` binary

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
