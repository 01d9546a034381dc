//! Submission form handlers for `/`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::redirect::found;

/// Template for the URL submission form.
///
/// Renders `templates/new_url.html`. On a rejected submission the error is
/// shown inline and the submitted value is echoed back into the input.
#[derive(Template, WebTemplate)]
#[template(path = "new_url.html")]
pub struct NewUrlTemplate {
    pub error: Option<String>,
    pub url: String,
}

/// Form body posted to `/`.
#[derive(Debug, Deserialize)]
pub struct NewUrlForm {
    #[serde(default)]
    pub url: String,
}

/// Renders an empty submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn new_url_form() -> impl IntoResponse {
    NewUrlTemplate {
        error: None,
        url: String::new(),
    }
}

/// Shortens the submitted URL.
///
/// # Endpoint
///
/// `POST /` with form field `url`
///
/// # Responses
///
/// - **302 Found** to `/{short_id}+` on success
/// - **200 OK** re-rendering the form with an error if the URL is rejected
/// - **503 Service Unavailable** if the store cannot be reached
pub async fn submit_url(
    State(state): State<AppState>,
    Form(form): Form<NewUrlForm>,
) -> Result<Response, AppError> {
    match state.link_service.shorten(&form.url).await {
        Ok(link) => Ok(found(&format!("/{}+", link.short_id))),
        Err(AppError::InvalidInput(message)) => Ok(NewUrlTemplate {
            error: Some(message),
            url: form.url,
        }
        .into_response()),
        Err(e) => Err(e),
    }
}
