//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info, warn};

use crate::config::mask_connection_string;
use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};

/// Redis store for link mappings and counters.
///
/// Uses `ConnectionManager` for connection reuse and transparent reconnects.
/// Counters rely on Redis `INCR`, which is atomic on the server.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", mask_connection_string(redis_url));

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Unavailable(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

/// Connection-level failures mean the store is unreachable; anything else is
/// a command the server rejected (e.g. `INCR` on a non-integer).
fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout()
    {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::Corrupt(e.to_string())
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            warn!("Redis GET error for {}: {}", key, e);
            map_redis_error(e)
        })
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            warn!("Redis SET error for {}: {}", key, e);
            map_redis_error(e)
        })?;

        debug!("SET {}", key);
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.client.clone();

        conn.incr::<_, _, i64>(key, 1).await.map_err(|e| {
            warn!("Redis INCR error for {}: {}", key, e);
            map_redis_error(e)
        })
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
