#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortly::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use shortly::infrastructure::store::MemoryStore;
use shortly::routes::app_router;
use shortly::state::AppState;
use std::sync::Arc;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Store whose every call fails as if Redis were down.
pub struct UnreachableStore;

#[async_trait]
impl KeyValueStore for UnreachableStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn incr(&self, _key: &str) -> StoreResult<i64> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_server_with_store(store: Arc<dyn KeyValueStore>) -> TestServer {
    let app = app_router(AppState::new(store), Some(STATIC_DIR));
    TestServer::new(app).unwrap()
}

/// Test server over a fresh in-memory store; the store is returned for inspection.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = create_test_server_with_store(store.clone());
    (server, store)
}

/// Submits `url` through the form and returns the short id from the redirect.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/").form(&[("url", url)]).await;
    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    let location = location.to_str().unwrap();

    location
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('+'))
        .unwrap()
        .to_string()
}
