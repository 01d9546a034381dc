//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Submission form
//! - `POST /`             - Shorten a URL
//! - `GET  /{short_id}`   - Redirect to the target URL
//! - `GET  /{short_id}+`  - Link details with click count
//! - `/static/*`          - Static assets (optional)
//!
//! Anything else renders a 404 page.

use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::tracing;
use axum::Router;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`; `None` disables static serving
pub fn app_router(state: AppState, static_dir: Option<&str>) -> Router {
    let mut router = web::routes::public_routes().fallback(not_found_handler);

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.with_state(state).layer(tracing::layer())
}
