//! Memoized time zone resolution
//!
//! `MemoizedResolver` maps identifiers to parsed descriptors and parses each
//! identifier at most once, as long as parsing succeeds.
//!
//! # Cache States
//!
//! | State | Transition | Description |
//! |-------|------------|-------------|
//! | Uninitialized | first lookup or `initialize()` | No store exists yet |
//! | Initialized | terminal | Store exists and only ever grows |
//!
//! A failed store creation leaves the cache `Uninitialized`, so the next
//! call tries again. Parse failures are never stored either: an identifier
//! that failed is handed to the parser again on every call.
//!
//! # Locking
//!
//! One mutex guards both store creation and store mutation. It is released
//! while the parser runs, so two threads missing on the same identifier can
//! both parse it; the first insert wins and both receive that descriptor.

use crate::error::{TzMemoError, TzMemoResult};
use crate::parser::TzParser;
use crate::store::{DescriptorStore, HashMapStore, StoreError};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Initial store capacity used by [`MemoizedResolver::new`]
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

type StoreFactory<S> = Box<dyn Fn(usize) -> Result<S, StoreError> + Send + Sync>;

/// Whether a lookup was served from the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Served from the cache without parsing
    Hit,
    /// Parsed and stored
    Miss,
}

impl Outcome {
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Miss => f.write_str("miss"),
        }
    }
}

/// A resolved descriptor along with how it was obtained
#[derive(Debug)]
pub struct Resolved<D> {
    /// Shared reference to the cached descriptor
    pub descriptor: Arc<D>,

    /// Cache hit or miss
    pub outcome: Outcome,
}

/// Snapshot of resolver counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,

    /// Lookups that invoked the parser
    pub misses: u64,

    /// Parser invocations that failed
    pub parse_failures: u64,

    /// Store creation attempts that failed
    pub store_init_failures: u64,

    /// Identifiers currently cached
    pub entries: usize,

    /// Whether the store has been created
    pub initialized: bool,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    parse_failures: AtomicU64,
    store_init_failures: AtomicU64,
}

enum CacheState<S> {
    Uninitialized,
    Initialized(S),
}

/// Get-or-create cache of parsed time zone descriptors
///
/// Descriptors are kept for as long as the resolver lives; there is no
/// eviction. Callers receive `Arc` clones and never own the cached value
/// exclusively.
pub struct MemoizedResolver<P: TzParser, S = HashMapStore<<P as TzParser>::Descriptor>> {
    parser: P,
    initial_capacity: usize,
    /// `None` uses `S::create`
    factory: Option<StoreFactory<S>>,
    state: Mutex<CacheState<S>>,
    counters: Counters,
}

impl<P: TzParser> MemoizedResolver<P> {
    /// Create a resolver with the default `HashMap` store
    pub fn new(parser: P) -> Self {
        Self::with_capacity(parser, DEFAULT_INITIAL_CAPACITY)
    }

    /// Create a resolver whose store is sized for `initial_capacity` entries
    pub fn with_capacity(parser: P, initial_capacity: usize) -> Self {
        Self::with_store(parser, initial_capacity)
    }
}

impl<P, S> MemoizedResolver<P, S>
where
    P: TzParser,
    S: DescriptorStore<P::Descriptor>,
{
    /// Create a resolver over a custom store type, created with `S::create`
    pub fn with_store(parser: P, initial_capacity: usize) -> Self {
        Self {
            parser,
            initial_capacity,
            factory: None,
            state: Mutex::new(CacheState::Uninitialized),
            counters: Counters::default(),
        }
    }

    /// Create a resolver whose store is built by `factory`
    pub fn with_store_factory<F>(parser: P, initial_capacity: usize, factory: F) -> Self
    where
        F: Fn(usize) -> Result<S, StoreError> + Send + Sync + 'static,
    {
        Self {
            factory: Some(Box::new(factory)),
            ..Self::with_store(parser, initial_capacity)
        }
    }

    /// Resolve `identifier`, parsing it from `database` on a cache miss
    ///
    /// Every call after the first successful one returns the same `Arc`
    /// without invoking the parser.
    pub fn resolve(
        &self,
        identifier: &str,
        database: &P::Database,
    ) -> TzMemoResult<Arc<P::Descriptor>> {
        self.lookup(identifier, database)
            .map(|resolved| resolved.descriptor)
    }

    /// Like [`resolve`](Self::resolve), also reporting hit or miss
    pub fn lookup(
        &self,
        identifier: &str,
        database: &P::Database,
    ) -> TzMemoResult<Resolved<P::Descriptor>> {
        let key = identifier.as_bytes();

        if let Some(descriptor) = self.access_store(|store| store.get(key))? {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
            trace!(identifier, "time zone cache hit");
            return Ok(Resolved {
                descriptor,
                outcome: Outcome::Hit,
            });
        }

        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        debug!(identifier, "time zone cache miss, parsing");

        let parsed = self.parser.parse(identifier, database).map_err(|failure| {
            self.counters.parse_failures.fetch_add(1, Ordering::Relaxed);
            debug!(identifier, code = %failure.code, "time zone parse failed: {}", failure.reason);
            TzMemoError::parse(identifier, failure)
        })?;

        // Another caller may have stored this key while we were parsing
        let descriptor = self.access_store(|store| match store.get(key) {
            Some(existing) => existing,
            None => {
                let descriptor = Arc::new(parsed);
                store.put(key, Arc::clone(&descriptor));
                descriptor
            }
        })?;

        Ok(Resolved {
            descriptor,
            outcome: Outcome::Miss,
        })
    }

    /// Create the store now instead of on the first lookup
    ///
    /// Does nothing if the store already exists.
    pub fn initialize(&self) -> TzMemoResult<()> {
        self.access_store(|_| ())
    }

    /// Whether the store has been created
    pub fn is_initialized(&self) -> bool {
        matches!(*self.lock_state(), CacheState::Initialized(_))
    }

    /// Whether `identifier` is cached; never creates the store
    pub fn contains(&self, identifier: &str) -> bool {
        match &*self.lock_state() {
            CacheState::Initialized(store) => store.get(identifier.as_bytes()).is_some(),
            CacheState::Uninitialized => false,
        }
    }

    /// Number of cached identifiers
    pub fn len(&self) -> usize {
        match &*self.lock_state() {
            CacheState::Initialized(store) => store.len(),
            CacheState::Uninitialized => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the resolver's counters
    pub fn stats(&self) -> CacheStats {
        let (entries, initialized) = match &*self.lock_state() {
            CacheState::Initialized(store) => (store.len(), true),
            CacheState::Uninitialized => (0, false),
        };

        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            parse_failures: self.counters.parse_failures.load(Ordering::Relaxed),
            store_init_failures: self.counters.store_init_failures.load(Ordering::Relaxed),
            entries,
            initialized,
        }
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Run `f` on the store, creating it first if needed
    fn access_store<T>(&self, f: impl FnOnce(&mut S) -> T) -> TzMemoResult<T> {
        let mut state = self.lock_state();

        if let CacheState::Uninitialized = *state {
            *state = CacheState::Initialized(self.create_store()?);
        }

        match &mut *state {
            CacheState::Initialized(store) => Ok(f(store)),
            CacheState::Uninitialized => unreachable!("store created above"),
        }
    }

    fn create_store(&self) -> TzMemoResult<S> {
        let capacity = self.initial_capacity;
        let created = match &self.factory {
            Some(factory) => factory(capacity),
            None => S::create(capacity),
        };

        match created {
            Ok(store) => {
                debug!(capacity, "descriptor store created");
                Ok(store)
            }
            Err(e) => {
                self.counters
                    .store_init_failures
                    .fetch_add(1, Ordering::Relaxed);
                debug!(capacity, "descriptor store creation failed: {}", e);
                Err(TzMemoError::StoreInit {
                    capacity,
                    reason: e.reason,
                })
            }
        }
    }

    // The state only changes through whole assignments and single `put`
    // calls, so a panic elsewhere cannot leave it half-written.
    fn lock_state(&self) -> MutexGuard<'_, CacheState<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P, S> fmt::Debug for MemoizedResolver<P, S>
where
    P: TzParser,
    S: DescriptorStore<P::Descriptor>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoizedResolver")
            .field("initial_capacity", &self.initial_capacity)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
