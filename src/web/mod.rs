//! Web layer for the browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Form, redirect and details handlers
//! - [`middleware`] - Request tracing
//! - [`redirect`] - `302 Found` response helper
//! - [`routes`] - Page route table

pub mod handlers;
pub mod middleware;
pub mod redirect;
pub mod routes;
