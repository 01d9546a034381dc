//! Storage port definitions for the domain layer.
//!
//! The shortening service talks to its backing store only through the
//! [`KeyValueStore`] trait. Concrete backends live in
//! `crate::infrastructure::store`, and a `mockall` mock is generated for
//! unit tests.

pub mod kv_store;

pub use kv_store::{
    KeyValueStore, LAST_URL_ID_KEY, StoreError, StoreResult, click_count_key, reverse_key,
    target_key,
};

#[cfg(test)]
pub use kv_store::MockKeyValueStore;
