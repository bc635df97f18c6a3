//! CLI argument definitions using clap derive

use crate::tzdb::DatabaseSource;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// tzmemo - memoizing time zone resolver
///
/// Resolves IANA time zone identifiers, parsing each one once and serving
/// repeats from an in-memory cache.
#[derive(Parser, Debug)]
#[command(name = "tzmemo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TZMEMO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Time zone database to read, overriding tzdb.source
    #[arg(long, global = true, value_enum)]
    pub tzdb: Option<DatabaseSource>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve time zone identifiers through the cache
    Resolve(ResolveArgs),

    /// List identifiers available in the database
    List(ListArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Time zone identifiers (e.g. UTC, America/New_York)
    #[arg(required = true)]
    pub identifiers: Vec<String>,

    /// Resolve the whole list this many times
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Unix timestamp (seconds) to report offsets at; defaults to now
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<i64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show identifiers containing this text (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., cache.initial_capacity)
        key: String,
        /// Value to set
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve() {
        let cli = Cli::parse_from([
            "tzmemo",
            "resolve",
            "UTC",
            "Asia/Tokyo",
            "--repeat",
            "3",
            "--at",
            "-86400",
            "--tzdb",
            "bundled",
        ]);
        assert_eq!(cli.tzdb, Some(DatabaseSource::Bundled));
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.identifiers, vec!["UTC", "Asia/Tokyo"]);
                assert_eq!(args.repeat, 3);
                assert_eq!(args.at, Some(-86400));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn resolve_requires_identifier() {
        assert!(Cli::try_parse_from(["tzmemo", "resolve"]).is_err());
    }

    #[test]
    fn repeat_must_be_positive() {
        assert!(Cli::try_parse_from(["tzmemo", "resolve", "UTC", "--repeat", "0"]).is_err());
    }

    #[test]
    fn config_defaults_to_show() {
        let cli = Cli::parse_from(["tzmemo", "config"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs { action: None })
        ));
    }
}
