//! tzmemo - memoizing time zone resolver
//!
//! Parsing a zone out of the time zone database is expensive, so
//! [`MemoizedResolver`] parses each identifier once and hands out shared
//! references to the result afterwards. Failed parses are never cached.
//!
//! ```no_run
//! use tzmemo::tzdb::{JiffParser, TzResolver};
//!
//! let db = jiff::tz::db();
//! let resolver = TzResolver::new(JiffParser);
//!
//! let first = resolver.resolve("America/New_York", db)?;
//! let again = resolver.resolve("America/New_York", db)?;
//! assert!(std::sync::Arc::ptr_eq(&first, &again));
//! # Ok::<(), tzmemo::TzMemoError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod shared;
pub mod store;
pub mod tzdb;
pub mod ui;

pub use error::{TzMemoError, TzMemoResult};
pub use parser::{ParseErrorCode, ParseFailure, TzParser};
pub use resolver::{CacheStats, MemoizedResolver, Outcome, Resolved};
pub use store::{DescriptorStore, HashMapStore, StoreError};
