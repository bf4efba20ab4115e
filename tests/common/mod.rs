#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::header::SET_COOKIE;
use axum_test::{TestResponse, TestServer};
use login_demo::config::Config;
use login_demo::routes::app_router;
use login_demo::state::AppState;

pub const USER_EMAIL: &str = "user@example.com";
pub const USER_PASSWORD: &str = "password123";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "adminpass";

pub fn create_test_state() -> AppState {
    AppState::from_config(&Config::default())
}

pub fn create_test_state_with(config: &Config) -> AppState {
    AppState::from_config(config)
}

/// Serves the full application router, trailing-slash normalization included.
pub fn make_server(state: AppState) -> TestServer {
    let app = app_router(state, &Config::default().static_dir);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn post_login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("email", email), ("password", password)])
        .await
}

/// Returns the `name=value` pair of the session cookie set by `response`.
pub fn session_cookie_pair(response: &TestResponse) -> Option<String> {
    let header = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}
