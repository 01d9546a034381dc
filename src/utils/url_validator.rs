//! Target URL validation.

use url::Url;

/// Returns `true` if `input` parses as an absolute URL with an `http` or
/// `https` scheme.
///
/// The URL is not normalized: the caller keeps the submitted string as-is.
///
/// # Examples
///
/// ```
/// use shortly::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
