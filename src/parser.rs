//! Time zone parser interface
//!
//! The resolver treats the parser as an opaque, possibly failing
//! collaborator: it hands over the identifier and database untouched and
//! passes any failure back to its caller unchanged.

use std::fmt;
use thiserror::Error;

/// Why a parser could not produce a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorCode {
    /// The identifier is malformed (empty, path traversal, NUL bytes)
    InvalidIdentifier,

    /// The database has no zone with this identifier
    UnknownIdentifier,

    /// The zone data exists but could not be decoded
    CorruptData,

    /// The database itself could not be read
    DatabaseUnavailable,

    /// A parser-specific code
    Other(i32),
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => f.write_str("invalid identifier"),
            Self::UnknownIdentifier => f.write_str("unknown identifier"),
            Self::CorruptData => f.write_str("corrupt data"),
            Self::DatabaseUnavailable => f.write_str("database unavailable"),
            Self::Other(code) => write!(f, "parser error {}", code),
        }
    }
}

/// A failed parse, as reported by the parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {reason}")]
pub struct ParseFailure {
    /// Failure code
    pub code: ParseErrorCode,

    /// Human-readable detail
    pub reason: String,
}

impl ParseFailure {
    /// Create a new parse failure
    pub fn new(code: ParseErrorCode, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }
}

/// Produces time zone descriptors from a database
///
/// Implementations are expected to be expensive; [`MemoizedResolver`]
/// calls `parse` at most once per identifier that parses successfully.
///
/// [`MemoizedResolver`]: crate::resolver::MemoizedResolver
pub trait TzParser {
    /// Handle to the source of time zone definitions
    type Database: ?Sized;

    /// Parsed, in-memory representation of a zone's rules
    type Descriptor;

    /// Parse the zone named `identifier` from `database`
    fn parse(
        &self,
        identifier: &str,
        database: &Self::Database,
    ) -> Result<Self::Descriptor, ParseFailure>;
}

impl<P: TzParser + ?Sized> TzParser for &P {
    type Database = P::Database;
    type Descriptor = P::Descriptor;

    fn parse(
        &self,
        identifier: &str,
        database: &Self::Database,
    ) -> Result<Self::Descriptor, ParseFailure> {
        (**self).parse(identifier, database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl TzParser for Upper {
        type Database = ();
        type Descriptor = String;

        fn parse(&self, identifier: &str, _database: &()) -> Result<String, ParseFailure> {
            if identifier.is_empty() {
                return Err(ParseFailure::new(ParseErrorCode::InvalidIdentifier, "empty"));
            }
            Ok(identifier.to_uppercase())
        }
    }

    #[test]
    fn failure_display() {
        let failure = ParseFailure::new(ParseErrorCode::Other(7), "slim file");
        assert_eq!(failure.to_string(), "parser error 7: slim file");
    }

    #[test]
    fn parser_by_reference() {
        let parser = Upper;
        let by_ref = &parser;
        assert_eq!(by_ref.parse("utc", &()).unwrap(), "UTC");
        assert_eq!(
            by_ref.parse("", &()).unwrap_err().code,
            ParseErrorCode::InvalidIdentifier
        );
    }
}
