//! Pure helpers used by the shortening service.
//!
//! - [`base36`] - Short id encoding
//! - [`url_validator`] - Target URL scheme check

pub mod base36;
pub mod url_validator;
