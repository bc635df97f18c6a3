//! IANA time zone database backend
//!
//! Plugs `jiff`'s time zone database into the resolver: `JiffParser` is the
//! parser, `TimeZoneDatabase` the database handle and `TimeZone` the
//! descriptor.
//!
//! # Database Sources
//!
//! | Source | Location |
//! |--------|----------|
//! | system | `TZDIR`, then the platform zoneinfo directory |
//! | bundled | Copy compiled into the binary |
//! | directory | An explicit zoneinfo directory |

pub mod parser;
pub mod source;

pub use parser::{validate_identifier, JiffParser};
pub use source::{available_identifiers, open_database, DatabaseSource};

use crate::resolver::MemoizedResolver;

/// Resolver over the IANA time zone database
pub type TzResolver = MemoizedResolver<JiffParser>;
