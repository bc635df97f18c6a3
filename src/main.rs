//! tzmemo - memoizing time zone resolver
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tzmemo::cli::{Cli, Commands};
use tzmemo::config::{ConfigManager, LogFormat};
use tzmemo::error::TzMemoResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> TzMemoResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = config_manager.load()?;

    // 0 = warn, 1 = info, 2 = debug, 3+ = trace (cache hits)
    let filter = match cli.verbose {
        0 => EnvFilter::new("tzmemo=warn"),
        1 => EnvFilter::new("tzmemo=info"),
        2 => EnvFilter::new("tzmemo=debug"),
        _ => EnvFilter::new("tzmemo=trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    match config.general.log_format {
        LogFormat::Text => subscriber.without_time().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    if let Some(source) = cli.tzdb {
        debug!("Database source overridden on the command line: {}", source);
        config.tzdb.source = source;
    }

    tzmemo::ui::init_theme();

    match cli.command {
        Commands::Resolve(args) => tzmemo::cli::commands::resolve(args, &config),
        Commands::List(args) => tzmemo::cli::commands::list(args, &config),
        Commands::Config(args) => tzmemo::cli::commands::config(args, &config, &config_manager),
    }
}
