//! Key-value store port and key layout.

use async_trait::async_trait;

/// Errors reported by a key-value store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or the command failed in transit.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A stored value does not have the expected shape (e.g. a counter that
    /// is not an integer).
    #[error("Corrupt store value: {0}")]
    Corrupt(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value store consumed by the shortening service.
///
/// Values are strings; counters are stored as decimal integers so that
/// `get` on a counter key returns its current value.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored at `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` at `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Atomically increments the integer at `key` and returns the new value.
    ///
    /// A missing key counts as `0`, so the first increment returns `1`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the existing value is not an integer.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}

/// Key holding the global sequence counter.
pub const LAST_URL_ID_KEY: &str = "last-url-id";

/// Forward mapping key: short id -> target URL.
pub fn target_key(short_id: &str) -> String {
    format!("url-target:{short_id}")
}

/// Reverse mapping key: target URL -> short id.
pub fn reverse_key(url: &str) -> String {
    format!("reverse-url:{url}")
}

/// Click counter key for a short id.
pub fn click_count_key(short_id: &str) -> String {
    format!("click-count:{short_id}")
}
