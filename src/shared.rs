//! Process-wide resolver
//!
//! Most callers should own a [`TzResolver`] and pass it where it is needed.
//! For code that cannot thread one through, this module keeps a single
//! resolver for the whole process, created on first use through `OnceLock`
//! and backed by `jiff`'s global database. Its cached zones live until the
//! process exits.

use crate::error::TzMemoResult;
use crate::tzdb::{JiffParser, TzResolver};
use jiff::tz::TimeZone;
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<TzResolver> = OnceLock::new();

/// The process-wide resolver
pub fn resolver() -> &'static TzResolver {
    SHARED.get_or_init(|| TzResolver::new(JiffParser))
}

/// Resolve `identifier` through the process-wide resolver and database
pub fn resolve(identifier: &str) -> TzMemoResult<Arc<TimeZone>> {
    resolver().resolve(identifier, jiff::tz::db())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn shared_resolver_is_a_singleton() {
        assert!(std::ptr::eq(resolver(), resolver()));
    }

    #[test]
    #[serial]
    fn shared_resolve_reuses_zone() {
        let first = resolve("UTC").unwrap();
        let hits_before = resolver().stats().hits;

        let second = resolve("UTC").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(resolver().stats().hits, hits_before + 1);
        assert!(resolver().contains("UTC"));
    }

    #[test]
    #[serial]
    fn shared_failure_leaves_no_entry() {
        assert!(resolve("Not/A_Zone").is_err());
        assert!(!resolver().contains("Not/A_Zone"));
    }
}
