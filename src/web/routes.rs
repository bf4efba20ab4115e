//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, login_handler, login_redirect_handler, welcome_handler};
use axum::{Router, routing::get};

/// Routes requiring a live session.
///
/// Protected via [`crate::web::middleware::session`].
///
/// # Endpoints
///
/// - `GET /welcome` - Welcome page for the logged-in user
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/welcome", get(welcome_handler))
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET  /`       - Login page
/// - `GET  /index`  - Login page
/// - `GET  /login`  - Redirect to `/`
/// - `POST /login`  - Credential check; renders welcome or login page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/index", get(index_handler))
        .route("/login", get(login_redirect_handler).post(login_handler))
}
