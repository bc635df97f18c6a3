//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;

/// Display success outro
pub fn outro_success(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(style(message).green().bold()).ok();
    } else {
        println!("{} {}", style("[OK]").green(), message);
    }
}

/// Display a section header
pub fn section(ctx: &UiContext, title: &str) {
    println!();
    if ctx.use_fancy_output() {
        cliclack::log::info(style(title).bold()).ok();
    } else {
        println!("{}", style(title).bold());
    }
}

/// Display a resolved zone: hits dimmed, misses highlighted
pub fn step_resolved(ctx: &UiContext, identifier: &str, hit: bool, detail: &str) {
    let tag = if hit { "hit" } else { "miss" };
    if ctx.use_fancy_output() {
        let tag = if hit {
            style(tag).dim()
        } else {
            style(tag).yellow()
        };
        cliclack::log::success(format!("{} [{}] {}", identifier, tag, style(detail).dim()))
            .ok();
    } else {
        println!("  {} {} [{}] {}", style("[OK]").green(), identifier, tag, detail);
    }
}

/// Display an error step with detail
pub fn step_error_detail(ctx: &UiContext, message: &str, detail: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::error(format!("{}: {}", message, style(detail).red())).ok();
    } else {
        println!("  {} {}: {}", style("[FAIL]").red(), message, detail);
    }
}

/// Display a warning step with hint
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::warning(format!("{} - {}", message, style(hint).dim())).ok();
    } else {
        println!("  {} {} - {}", style("[WARN]").yellow(), message, hint);
    }
}

/// Print styled key-value pair
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    if ctx.use_fancy_output() {
        println!("  {}: {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}
