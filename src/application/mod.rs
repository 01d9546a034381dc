//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::KeyValueStore`] port
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and click tracking

pub mod services;
