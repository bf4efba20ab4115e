//! Top-level router configuration combining web and health routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/index`  - Login page (public)
//! - `GET  /login`       - Redirect to `/` (public)
//! - `POST /login`       - Form login (public)
//! - `GET  /welcome`     - Welcome page (session cookie required)
//! - `GET  /health`      - Health check (public)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Session** - Cookie session on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routes and middleware without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_routes(state: AppState, static_dir: &str) -> Router {
    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), session::layer),
    );

    let web_router = Router::new()
        .merge(web_protected)
        .merge(web::routes::public_routes());

    Router::new()
        .merge(web_router)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, static_dir))
}
