//! Infrastructure layer for external integrations.
//!
//! Implements the storage port defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Key-value store backends (Redis and in-memory)

pub mod store;
