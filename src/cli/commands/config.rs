//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, LogFormat};
use crate::error::{TzMemoError, TzMemoResult};
use crate::tzdb::DatabaseSource;
use crate::ui::{self, UiContext};
use clap::ValueEnum;
use std::path::PathBuf;

const VALID_KEYS: [&str; 5] = [
    "general.log_format",
    "cache.initial_capacity",
    "cache.eager_init",
    "tzdb.source",
    "tzdb.directory",
];

/// Execute the config command
pub fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> TzMemoResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force)?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value)?,
    }

    Ok(())
}

fn show_config(config: &Config) -> TzMemoResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn init_config(manager: &ConfigManager, force: bool) -> TzMemoResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default())?;
    ui::outro_success(
        &ctx,
        &format!("Configuration initialized at {}", path.display()),
    );

    Ok(())
}

fn set_value(manager: &ConfigManager, config: &Config, key: &str, value: &str) -> TzMemoResult<()> {
    let mut config = config.clone();
    apply(&mut config, key, value)?;

    manager.save(&config)?;
    ui::outro_success(&UiContext::detect(), &format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply a dot-separated `key = value` assignment
fn apply(config: &mut Config, key: &str, value: &str) -> TzMemoResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => {
            config.general.log_format = match value.to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(TzMemoError::User(format!(
                        "Invalid log format: {}. Use text/json",
                        value
                    )))
                }
            }
        }
        ["cache", "initial_capacity"] => config.cache.initial_capacity = parse_usize(value)?,
        ["cache", "eager_init"] => config.cache.eager_init = parse_bool(value)?,
        ["tzdb", "source"] => {
            config.tzdb.source = DatabaseSource::from_str(value, true).map_err(|_| {
                TzMemoError::User(format!(
                    "Invalid database source: {}. Use system/bundled/directory",
                    value
                ))
            })?
        }
        ["tzdb", "directory"] => {
            config.tzdb.directory = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        _ => {
            return Err(TzMemoError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> TzMemoResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(TzMemoError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_usize(value: &str) -> TzMemoResult<usize> {
    value
        .parse()
        .map_err(|_| TzMemoError::User(format!("Invalid number: {}", value)))
}
