//! Welcome page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, response::IntoResponse};

use crate::web::middleware::session::AuthenticatedUser;

/// Template for the welcome page shown after a successful login.
#[derive(Template, WebTemplate)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub user_email: String,
}

/// Renders the welcome page for the user held in the current session.
///
/// # Endpoint
///
/// `GET /welcome`
///
/// # Authentication
///
/// Protected by [`crate::web::middleware::session::layer`]; requests without
/// a live session are redirected to `/` before reaching this handler.
pub async fn welcome_handler(
    Extension(AuthenticatedUser(user_email)): Extension<AuthenticatedUser>,
) -> impl IntoResponse {
    WelcomeTemplate { user_email }
}
