//! Error types for tzmemo
//!
//! All modules use `TzMemoResult<T>` as their return type.

use crate::parser::{ParseErrorCode, ParseFailure};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tzmemo operations
pub type TzMemoResult<T> = Result<T, TzMemoError>;

/// All errors that can occur in tzmemo
#[derive(Error, Debug)]
pub enum TzMemoError {
    // Resolution errors
    #[error("Descriptor store could not be created (initial capacity {capacity}): {reason}")]
    StoreInit { capacity: usize, reason: String },

    #[error("Failed to resolve time zone {identifier:?}: {failure}")]
    Parse {
        identifier: String,
        #[source]
        failure: ParseFailure,
    },

    // Database errors
    #[error("Failed to open time zone database at {path}: {reason}")]
    DatabaseOpen { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl TzMemoError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an identifier
    pub fn parse(identifier: impl Into<String>, failure: ParseFailure) -> Self {
        Self::Parse {
            identifier: identifier.into(),
            failure,
        }
    }

    /// The parser's failure code, unchanged, if this is a parse error
    pub fn parse_code(&self) -> Option<ParseErrorCode> {
        match self {
            Self::Parse { failure, .. } => Some(failure.code),
            _ => None,
        }
    }

    /// Check if error is retryable
    ///
    /// Neither store creation failures nor parse failures are cached, so the
    /// next resolution attempt starts from scratch.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreInit { .. } | Self::Parse { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Parse { failure, .. } => match failure.code {
                ParseErrorCode::UnknownIdentifier => {
                    Some("Run: tzmemo list to see available identifiers")
                }
                ParseErrorCode::DatabaseUnavailable => {
                    Some("Try: --tzdb bundled to use the bundled database")
                }
                _ => None,
            },
            Self::DatabaseOpen { .. } => Some("Check tzdb.directory in: tzmemo config show"),
            Self::ConfigInvalid { .. } => Some("Regenerate defaults with: tzmemo config init --force"),
            _ => None,
        }
    }
}
