//! Application error type and its HTTP mapping.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::repositories::StoreError;

/// Errors surfaced by service operations to the web layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submitted input was rejected (e.g. a URL with an unsupported scheme).
    #[error("{0}")]
    InvalidInput(String),

    /// No short link exists for the requested id.
    #[error("{0}")]
    NotFound(String),

    /// The key-value store could not be reached.
    #[error("{0}")]
    StoreUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(reason) => {
                tracing::error!("Store unavailable: {}", reason);
                AppError::store_unavailable("The link store is temporarily unavailable")
            }
            StoreError::Corrupt(reason) => {
                tracing::error!("Corrupt store value: {}", reason);
                AppError::internal("Internal server error")
            }
        }
    }
}

/// Template for error pages.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::InvalidInput(m)
            | AppError::NotFound(m)
            | AppError::StoreUnavailable(m)
            | AppError::Internal(m) => m,
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };

        (status, page).into_response()
    }
}
