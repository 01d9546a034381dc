//! Link creation, resolution and click tracking service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{LinkDetails, ShortLink};
use crate::domain::repositories::{
    KeyValueStore, LAST_URL_ID_KEY, StoreError, click_count_key, reverse_key, target_key,
};
use crate::error::AppError;
use crate::utils::base36;
use crate::utils::url_validator::is_valid_url;

/// Message shown back to the user when a submitted URL is rejected.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Service for shortening URLs and following short links.
///
/// All state lives in the key-value store. Uniqueness of short ids and
/// correctness of click counts rely on the store's atomic increment, so no
/// in-process locking is needed.
pub struct LinkService {
    store: Arc<dyn KeyValueStore>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Shortens a URL, reusing the existing short id for an identical URL string.
    ///
    /// # Deduplication
    ///
    /// The reverse mapping is keyed by the exact submitted string. No
    /// normalization is performed, so `http://x.com` and `http://x.com/`
    /// get distinct ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is not `http`/`https`.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    pub async fn shorten(&self, url: &str) -> Result<ShortLink, AppError> {
        if !is_valid_url(url) {
            return Err(AppError::invalid_input(INVALID_URL_MESSAGE));
        }

        if let Some(short_id) = self.store.get(&reverse_key(url)).await? {
            debug!("Reusing short id {} for {}", short_id, url);
            return Ok(ShortLink::new(short_id, url));
        }

        let sequence = self.store.incr(LAST_URL_ID_KEY).await?;
        let sequence = u64::try_from(sequence).map_err(|_| {
            StoreError::Corrupt(format!("{LAST_URL_ID_KEY} is negative: {sequence}"))
        })?;
        let short_id = base36::encode(sequence);

        // Forward mapping first: a reverse hit must always be resolvable.
        self.store.set(&target_key(&short_id), url).await?;
        self.store.set(&reverse_key(url), &short_id).await?;

        debug!("Created short id {} for {}", short_id, url);

        Ok(ShortLink::new(short_id, url))
    }

    /// Returns the target URL for a short id and records a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short id does not exist; no click
    /// is recorded in that case.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        let target_url = self.find_target(short_id).await?;

        let clicks = self.store.incr(&click_count_key(short_id)).await?;
        debug!("Click #{} on {}", clicks, short_id);

        Ok(target_url)
    }

    /// Returns the target URL and click count for a short id without
    /// recording a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short id does not exist.
    pub async fn get_details(&self, short_id: &str) -> Result<LinkDetails, AppError> {
        let target_url = self.find_target(short_id).await?;
        let click_count = self.read_counter(&click_count_key(short_id)).await?;

        Ok(LinkDetails {
            short_id: short_id.to_string(),
            target_url,
            click_count,
        })
    }

    /// Returns the number of distinct URLs shortened so far.
    pub async fn links_issued(&self) -> Result<u64, AppError> {
        self.read_counter(LAST_URL_ID_KEY).await
    }

    /// Checks if the backing store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    async fn find_target(&self, short_id: &str) -> Result<String, AppError> {
        self.store
            .get(&target_key(short_id))
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Reads a counter key, treating a missing key as zero.
    async fn read_counter(&self, key: &str) -> Result<u64, AppError> {
        match self.store.get(key).await? {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::from(StoreError::Corrupt(format!("{key} is not a counter: {raw}")))
            }),
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockKeyValueStore;

    fn service(store: MockKeyValueStore) -> LinkService {
        LinkService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_shorten_creates_new_link() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "reverse-url:http://example.com")
            .times(1)
            .returning(|_| Ok(None));

        store
            .expect_incr()
            .withf(|key| key == "last-url-id")
            .times(1)
            .returning(|_| Ok(1));

        store
            .expect_set()
            .withf(|key, value| key == "url-target:1" && value == "http://example.com")
            .times(1)
            .returning(|_, _| Ok(()));

        store
            .expect_set()
            .withf(|key, value| key == "reverse-url:http://example.com" && value == "1")
            .times(1)
            .returning(|_, _| Ok(()));

        let link = service(store).shorten("http://example.com").await.unwrap();

        assert_eq!(link.short_id, "1");
        assert_eq!(link.target_url, "http://example.com");
    }

    #[tokio::test]
    async fn test_shorten_encodes_counter_in_base36() {
        let mut store = MockKeyValueStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store.expect_incr().times(1).returning(|_| Ok(1295));
        store.expect_set().times(2).returning(|_, _| Ok(()));

        let link = service(store).shorten("https://example.com/a").await.unwrap();

        assert_eq!(link.short_id, "zz");
    }

    #[tokio::test]
    async fn test_shorten_deduplication() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "reverse-url:https://example.com")
            .times(1)
            .returning(|_| Ok(Some("a".to_string())));

        store.expect_incr().times(0);
        store.expect_set().times(0);

        let link = service(store).shorten("https://example.com").await.unwrap();

        assert_eq!(link.short_id, "a");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().times(0);
        store.expect_incr().times(0);

        let result = service(store).shorten("ftp://example.com").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_shorten_negative_counter_is_internal_error() {
        let mut store = MockKeyValueStore::new();

        store.expect_get().returning(|_| Ok(None));
        store.expect_incr().returning(|_| Ok(-5));
        store.expect_set().times(0);

        let result = service(store).shorten("http://example.com").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_shorten_store_unavailable() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .returning(|_| Err(StoreError::Unavailable("connection refused".into())));

        let result = service(store).shorten("http://example.com").await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_resolve_records_click() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "url-target:1")
            .times(1)
            .returning(|_| Ok(Some("http://example.com".to_string())));

        store
            .expect_incr()
            .withf(|key| key == "click-count:1")
            .times(1)
            .returning(|_| Ok(1));

        let target = service(store).resolve("1").await.unwrap();

        assert_eq!(target, "http://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found_does_not_count() {
        let mut store = MockKeyValueStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store.expect_incr().times(0);

        let result = service(store).resolve("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_details_defaults_to_zero_clicks() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "url-target:b")
            .returning(|_| Ok(Some("https://example.com".to_string())));

        store
            .expect_get()
            .withf(|key| key == "click-count:b")
            .returning(|_| Ok(None));

        store.expect_incr().times(0);

        let details = service(store).get_details("b").await.unwrap();

        assert_eq!(
            details,
            LinkDetails {
                short_id: "b".to_string(),
                target_url: "https://example.com".to_string(),
                click_count: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_get_details_reads_click_count() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "url-target:b")
            .returning(|_| Ok(Some("https://example.com".to_string())));

        store
            .expect_get()
            .withf(|key| key == "click-count:b")
            .returning(|_| Ok(Some("42".to_string())));

        let details = service(store).get_details("b").await.unwrap();

        assert_eq!(details.click_count, 42);
    }

    #[tokio::test]
    async fn test_get_details_not_found() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));

        let result = service(store).get_details("nope").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_details_corrupt_counter() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "url-target:b")
            .returning(|_| Ok(Some("https://example.com".to_string())));

        store
            .expect_get()
            .withf(|key| key == "click-count:b")
            .returning(|_| Ok(Some("lots".to_string())));

        let result = service(store).get_details("b").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_links_issued() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_get()
            .withf(|key| key == "last-url-id")
            .returning(|_| Ok(Some("17".to_string())));

        assert_eq!(service(store).links_issued().await.unwrap(), 17);
    }
}
