//! Page route table.

use crate::state::AppState;
use crate::web::handlers::{new_url_form, short_link_handler, submit_url};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Submission form
/// - `POST /` - Shorten the submitted URL
/// - `GET /{short_id}` - Follow a short link
/// - `GET /{short_id}+` - Short link details (same route, `+` suffix)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(new_url_form).post(submit_url))
        .route("/{short_id}", get(short_link_handler))
}
