//! Login form submission handlers.

use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::LoginOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::{LoginTemplate, WelcomeTemplate};
use crate::web::middleware::session::session_cookie;

/// Fields posted by the login form. Either may be missing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    /// Picks `email` and `password` out of decoded form pairs.
    ///
    /// A repeated field keeps its first value; unknown fields are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "email" => &mut form.email,
                "password" => &mut form.password,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

/// Processes a login form submission.
///
/// # Endpoint
///
/// `POST /login` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// Both outcomes are rendered in place, so the browser stays on `/login`:
///
/// - **Success**: `200 OK` with the welcome page and a `Set-Cookie` header
///   carrying the new session id
/// - **Failure**: `200 OK` with the login page showing
///   [`crate::domain::credentials::INVALID_CREDENTIALS_MESSAGE`]; no cookie
///
/// # Errors
///
/// Returns `500 Internal Server Error` only if the session cannot be stored.
pub async fn login_handler(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = LoginForm::from_pairs(pairs);
    let outcome = state
        .login_service
        .login(form.email.as_deref(), form.password.as_deref())
        .await?;

    match outcome {
        LoginOutcome::Welcome {
            user_email,
            session,
        } => {
            let cookie = session_cookie(&state.cookie, &session.id)?;
            Ok(([(SET_COOKIE, cookie)], WelcomeTemplate { user_email }).into_response())
        }
        LoginOutcome::Rejected { error_message } => Ok(LoginTemplate {
            error_message: Some(error_message),
        }
        .into_response()),
    }
}

/// Sends direct visits to `/login` back to the login form.
///
/// # Endpoint
///
/// `GET /login` → `303 See Other` to `/`
pub async fn login_redirect_handler() -> Redirect {
    Redirect::to("/")
}
