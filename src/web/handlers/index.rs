//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
///
/// Renders `templates/login.html` with the email/password form and, after a
/// failed attempt, the error message above it.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error_message: Option<&'static str>,
}

/// Renders the empty login form.
///
/// # Endpoint
///
/// `GET /` and `GET /index`
pub async fn index_handler() -> impl IntoResponse {
    LoginTemplate {
        error_message: None,
    }
}
