//! Time zone parser backed by `jiff`

use crate::parser::{ParseErrorCode, ParseFailure, TzParser};
use jiff::tz::{TimeZone, TimeZoneDatabase};
use std::path::{Component, Path};

/// Parses IANA identifiers out of a `jiff` time zone database
///
/// Lookups in the database are case-insensitive, but the resolver keys its
/// cache on the exact identifier bytes, so `"utc"` and `"UTC"` are cached
/// separately.
///
/// `jiff` reports a zone file it cannot read or decode as not found, so every
/// database error surfaces as [`ParseErrorCode::UnknownIdentifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JiffParser;

impl TzParser for JiffParser {
    type Database = TimeZoneDatabase;
    type Descriptor = TimeZone;

    fn parse(
        &self,
        identifier: &str,
        database: &TimeZoneDatabase,
    ) -> Result<TimeZone, ParseFailure> {
        validate_identifier(identifier)?;

        database.get(identifier).map_err(|e| {
            ParseFailure::new(ParseErrorCode::UnknownIdentifier, e.to_string())
        })
    }
}

/// Reject identifiers that can never name a zone
///
/// Identifiers double as relative paths inside a zoneinfo directory, so
/// anything that could escape it is refused before the database is consulted.
pub fn validate_identifier(identifier: &str) -> Result<(), ParseFailure> {
    let invalid = |reason: &str| Err(ParseFailure::new(ParseErrorCode::InvalidIdentifier, reason));

    if identifier.is_empty() {
        return invalid("empty time zone identifier");
    }

    if identifier.contains('\0') {
        return invalid("time zone identifier contains a NUL byte");
    }

    let path = Path::new(identifier);
    if path.is_absolute() {
        return invalid("time zone identifier must not be an absolute path");
    }

    if path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return invalid("time zone identifier must not contain '.' or '..' components");
    }

    Ok(())
}
