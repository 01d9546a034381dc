//! In-process key-value store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};

/// A thread-safe in-memory store backed by a `DashMap`.
///
/// Increments hold the shard lock for the key while reading and writing,
/// which makes them atomic with respect to other store calls. Data lives
/// only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut entry = self.entries.entry(key.to_string()).or_insert_with(|| "0".to_string());

        let current: i64 = entry
            .parse()
            .map_err(|_| StoreError::Corrupt(format!("{key} is not an integer: {}", *entry)))?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| StoreError::Corrupt(format!("{key} overflowed")))?;

        *entry = next.to_string();
        Ok(next)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
