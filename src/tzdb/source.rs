//! Opening time zone databases

use crate::error::{TzMemoError, TzMemoResult};
use clap::ValueEnum;
use jiff::tz::TimeZoneDatabase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Where time zone definitions are read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseSource {
    /// Platform zoneinfo, honoring `TZDIR`
    #[default]
    System,
    /// Database compiled into the binary
    Bundled,
    /// Explicit zoneinfo directory
    Directory,
}

impl fmt::Display for DatabaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Bundled => f.write_str("bundled"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// Open the database for `source`
///
/// `directory` is required for [`DatabaseSource::Directory`] and ignored
/// otherwise.
pub fn open_database(
    source: DatabaseSource,
    directory: Option<&Path>,
) -> TzMemoResult<TimeZoneDatabase> {
    let db = match source {
        DatabaseSource::System => TimeZoneDatabase::from_env(),
        DatabaseSource::Bundled => TimeZoneDatabase::bundled(),
        DatabaseSource::Directory => {
            let dir = directory.ok_or_else(|| {
                TzMemoError::User(
                    "tzdb.source is \"directory\" but tzdb.directory is not set".to_string(),
                )
            })?;
            if !dir.is_dir() {
                return Err(TzMemoError::DatabaseOpen {
                    path: dir.to_path_buf(),
                    reason: "not a directory".to_string(),
                });
            }
            TimeZoneDatabase::from_dir(dir).map_err(|e| TzMemoError::DatabaseOpen {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })?
        }
    };

    debug!(%source, "opened time zone database");
    Ok(db)
}

/// Sorted identifiers known to `db`, optionally filtered by a
/// case-insensitive substring
pub fn available_identifiers(db: &TimeZoneDatabase, filter: Option<&str>) -> Vec<String> {
    let needle = filter.map(str::to_lowercase);
    let mut names: Vec<String> = db
        .available()
        .map(|name| name.as_str().to_string())
        .filter(|name| match &needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();
    names.sort();
    names
}
