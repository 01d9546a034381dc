//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::KeyValueStore;

/// State shared by all request handlers.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Wraps a store in a [`LinkService`] and builds the state around it.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
        }
    }
}
