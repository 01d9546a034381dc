//! `302 Found` redirects.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

/// Builds a `302 Found` response pointing at `location`.
///
/// Stored targets are kept exactly as submitted, so they may contain spaces
/// or non-ASCII characters. Anything that is not plain printable ASCII is
/// sent in its serialized URL form (punycode host, percent-encoded path).
pub fn found(location: &str) -> Response {
    let value = if location.bytes().all(|b| b.is_ascii_graphic()) {
        HeaderValue::from_str(location).ok()
    } else {
        Url::parse(location)
            .ok()
            .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
    };

    match value {
        Some(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        None => {
            tracing::error!("Cannot build Location header for {:?}", location);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
