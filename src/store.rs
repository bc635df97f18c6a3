//! Descriptor storage
//!
//! A string-keyed associative store holding parsed descriptors. The
//! resolver only needs create/get/put; entries are never removed.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Store creation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct StoreError {
    /// Why the store could not be created
    pub reason: String,
}

impl StoreError {
    /// Create a new store error
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Associative store from identifier bytes to descriptors
pub trait DescriptorStore<D>: Sized {
    /// Create an empty store sized for `initial_capacity` entries
    fn create(initial_capacity: usize) -> Result<Self, StoreError>;

    /// Look up the descriptor stored under `key`
    fn get(&self, key: &[u8]) -> Option<Arc<D>>;

    /// Insert or overwrite the descriptor stored under `key`
    fn put(&mut self, key: &[u8], descriptor: Arc<D>);

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Whether the store holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default store backed by a `HashMap`
#[derive(Debug)]
pub struct HashMapStore<D> {
    entries: HashMap<Box<[u8]>, Arc<D>>,
}

impl<D> DescriptorStore<D> for HashMapStore<D> {
    fn create(initial_capacity: usize) -> Result<Self, StoreError> {
        let mut entries = HashMap::new();
        entries.try_reserve(initial_capacity).map_err(|e| {
            StoreError::new(format!(
                "reserving space for {} entries: {}",
                initial_capacity, e
            ))
        })?;
        Ok(Self { entries })
    }

    fn get(&self, key: &[u8]) -> Option<Arc<D>> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &[u8], descriptor: Arc<D>) {
        self.entries.insert(key.into(), descriptor);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_reserves_capacity() {
        let store = HashMapStore::<u32>::create(16).unwrap();
        assert!(store.is_empty());
        assert!(store.entries.capacity() >= 16);
    }

    #[test]
    fn create_fails_on_capacity_overflow() {
        let err = HashMapStore::<u32>::create(usize::MAX).unwrap_err();
        assert!(err.reason.contains("reserving space"));
    }

    #[test]
    fn get_and_put() {
        let mut store = HashMapStore::<u32>::create(1).unwrap();
        assert!(store.get(b"UTC").is_none());

        let descriptor = Arc::new(0u32);
        store.put(b"UTC", Arc::clone(&descriptor));

        let found = store.get(b"UTC").unwrap();
        assert!(Arc::ptr_eq(&found, &descriptor));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_are_exact_bytes() {
        let mut store = HashMapStore::<u32>::create(4).unwrap();
        store.put(b"UTC", Arc::new(1u32));

        assert!(store.get(b"utc").is_none());
        assert!(store.get(b"UTC ").is_none());
        assert!(store.get(b"UT").is_none());
    }
}
