//! Domain layer containing business entities and storage ports.
//!
//! - [`entities`] - Short link data structures
//! - [`repositories`] - Key-value store trait and key layout
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
