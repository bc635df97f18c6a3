//! CLI command implementations

pub mod config;
pub mod list;
pub mod resolve;

pub use config::execute as config;
pub use list::execute as list;
pub use resolve::execute as resolve;

use crate::config::Config;
use crate::error::TzMemoResult;
use crate::tzdb::{open_database, JiffParser, TzResolver};
use jiff::tz::TimeZoneDatabase;

/// Open the configured database
pub(crate) fn database(config: &Config) -> TzMemoResult<TimeZoneDatabase> {
    open_database(config.tzdb.source, config.tzdb.directory.as_deref())
}

/// Build a resolver from the cache settings
pub(crate) fn resolver(config: &Config) -> TzMemoResult<TzResolver> {
    let resolver = TzResolver::with_capacity(JiffParser, config.cache.initial_capacity);
    if config.cache.eager_init {
        resolver.initialize()?;
    }
    Ok(resolver)
}
