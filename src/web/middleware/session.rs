//! Cookie-based session middleware for the welcome page.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header::COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::{AppState, SessionCookieSettings};

/// Identity of the logged-in user, inserted into request extensions by [`layer`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

/// Requires a live session for the wrapped routes.
///
/// # Authentication Flow
///
/// 1. Extract the session cookie (name from [`SessionCookieSettings`])
/// 2. Resolve it via [`crate::application::services::LoginService::current_user`]
/// 3. On success, insert [`AuthenticatedUser`] and continue to the handler
/// 4. On a missing, unknown or expired session, redirect to `/`
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/welcome", get(welcome_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(session_id) = session_id_from_headers(req.headers(), &st.cookie.name) else {
        return Redirect::to("/").into_response();
    };

    match st.login_service.current_user(&session_id).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(AuthenticatedUser(user));
            next.run(req).await
        }
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Extracts the value of cookie `name` from the `Cookie` header(s).
///
/// Handles multiple cookies per header by splitting on semicolons and
/// ignores cookies with other names.
pub fn session_id_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

/// Builds the `Set-Cookie` value that attaches `session_id` to the browser.
///
/// The cookie carries no `Max-Age`, so it lives until the browser closes;
/// the server-side idle timeout decides when the session actually ends.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the cookie is not a valid header value.
pub fn session_cookie(
    settings: &SessionCookieSettings,
    session_id: &str,
) -> Result<HeaderValue, AppError> {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax",
        settings.name, session_id
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|_| AppError::internal("Failed to build session cookie", json!({})))
}
