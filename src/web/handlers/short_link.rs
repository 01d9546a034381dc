//! Handlers for `/{short_id}` and `/{short_id}+`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::redirect::found;

/// Suffix that turns a short link path into its details page.
const DETAILS_SUFFIX: char = '+';

/// A parsed short link path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPath {
    /// `/{short_id}`: follow the link.
    Follow(String),
    /// `/{short_id}+`: show link details.
    Details(String),
}

impl LinkPath {
    /// Parses the single path segment after `/`.
    pub fn parse(segment: &str) -> Self {
        match segment.strip_suffix(DETAILS_SUFFIX) {
            Some(short_id) => Self::Details(short_id.to_string()),
            None => Self::Follow(segment.to_string()),
        }
    }
}

/// Template for the short link details page.
#[derive(Template, WebTemplate)]
#[template(path = "short_link_details.html")]
pub struct ShortLinkDetailsTemplate {
    pub short_id: String,
    pub link_target: String,
    pub click_count: u64,
}

/// Follows a short link or shows its details, depending on the `+` suffix.
///
/// # Endpoints
///
/// - `GET /{short_id}` - **302 Found** to the target URL; counts a click
/// - `GET /{short_id}+` - **200 OK** details page; read-only
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn short_link_handler(
    Path(segment): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match LinkPath::parse(&segment) {
        LinkPath::Follow(short_id) => {
            let target_url = state.link_service.resolve(&short_id).await?;
            Ok(found(&target_url))
        }
        LinkPath::Details(short_id) => {
            let details = state.link_service.get_details(&short_id).await?;
            Ok(ShortLinkDetailsTemplate {
                short_id: details.short_id,
                link_target: details.target_url,
                click_count: details.click_count,
            }
            .into_response())
        }
    }
}

/// Router fallback for paths no route matches.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Page not found")
}
