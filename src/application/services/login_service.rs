//! Login service: credential check followed by session establishment.

use std::sync::Arc;

use crate::domain::credentials::{AuthResult, CredentialStore, INVALID_CREDENTIALS_MESSAGE};
use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Where a login attempt sends the user next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Render the welcome view for `user_email`; `session` must be attached
    /// to the response.
    Welcome { user_email: String, session: Session },
    /// Render the login view again with `error_message`.
    Rejected { error_message: &'static str },
}

/// Orchestrates a form login.
///
/// The credential check itself is pure ([`CredentialStore::authenticate`]);
/// this service adds the one side effect of a successful login, creating a
/// session through the [`SessionRepository`].
pub struct LoginService<R: SessionRepository + ?Sized> {
    credentials: Arc<CredentialStore>,
    sessions: Arc<R>,
}

impl<R: SessionRepository + ?Sized> LoginService<R> {
    pub fn new(credentials: Arc<CredentialStore>, sessions: Arc<R>) -> Self {
        Self {
            credentials,
            sessions,
        }
    }

    /// Processes a submitted email/password pair.
    ///
    /// A failed check is returned as [`LoginOutcome::Rejected`] and leaves the
    /// session store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if the session store fails.
    pub async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginOutcome, AppError> {
        match self.credentials.authenticate(email, password) {
            AuthResult::Authenticated { email } => {
                let session = self.sessions.establish_session(&email).await?;
                tracing::info!(user = %email, "Login succeeded");
                Ok(LoginOutcome::Welcome {
                    user_email: email,
                    session,
                })
            }
            AuthResult::Unauthenticated => {
                tracing::warn!("Login rejected");
                Ok(LoginOutcome::Rejected {
                    error_message: INVALID_CREDENTIALS_MESSAGE,
                })
            }
        }
    }

    /// Resolves a session id to the identity it was established for.
    ///
    /// Refreshes the session's idle timer on success.
    pub async fn current_user(&self, session_id: &str) -> Result<Option<String>, AppError> {
        match self.sessions.find(session_id).await? {
            Some(session) => {
                self.sessions.touch(session_id).await?;
                Ok(Some(session.authenticated_user))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSessionRepository;
    use serde_json::json;

    fn service(mock: MockSessionRepository) -> LoginService<MockSessionRepository> {
        LoginService::new(Arc::new(CredentialStore::default()), Arc::new(mock))
    }

    #[tokio::test]
    async fn test_login_success_establishes_session() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo
            .expect_establish_session()
            .withf(|identity| identity == "user@example.com")
            .times(1)
            .returning(|identity| Ok(Session::new(identity)));

        let outcome = service(mock_repo)
            .login(Some(" user@example.com "), Some("password123"))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Welcome {
                user_email,
                session,
            } => {
                assert_eq!(user_email, "user@example.com");
                assert_eq!(session.authenticated_user, "user@example.com");
            }
            other => panic!("expected welcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_keeps_submitted_email_case() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo
            .expect_establish_session()
            .withf(|identity| identity == "USER@EXAMPLE.COM")
            .times(1)
            .returning(|identity| Ok(Session::new(identity)));

        let outcome = service(mock_repo)
            .login(Some("USER@EXAMPLE.COM"), Some("password123"))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            LoginOutcome::Welcome { ref user_email, .. } if user_email == "USER@EXAMPLE.COM"
        ));
    }

    #[tokio::test]
    async fn test_login_failure_does_not_touch_sessions() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo.expect_establish_session().times(0);

        let service = service(mock_repo);

        for (email, password) in [
            (Some("user@example.com"), Some("wrongpass")),
            (Some("unknown@example.com"), Some("anything")),
            (Some(""), Some("")),
            (None, None),
        ] {
            let outcome = service.login(email, password).await.unwrap();
            assert_eq!(
                outcome,
                LoginOutcome::Rejected {
                    error_message: INVALID_CREDENTIALS_MESSAGE
                }
            );
        }
    }

    #[tokio::test]
    async fn test_login_propagates_store_failure() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo
            .expect_establish_session()
            .times(1)
            .returning(|_| Err(AppError::internal("Session store unavailable", json!({}))));

        let result = service(mock_repo)
            .login(Some("admin@example.com"), Some("adminpass"))
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_current_user_touches_session() {
        let session = Session::new("admin@example.com");
        let id = session.id.clone();

        let mut mock_repo = MockSessionRepository::new();
        let found = session.clone();
        mock_repo
            .expect_find()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        mock_repo
            .expect_touch()
            .withf(move |touched| touched == id)
            .times(1)
            .returning(|_| Ok(()));

        let user = service(mock_repo).current_user(&session.id).await.unwrap();

        assert_eq!(user.as_deref(), Some("admin@example.com"));
    }

    #[tokio::test]
    async fn test_current_user_unknown_session() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo.expect_find().times(1).returning(|_| Ok(None));
        mock_repo.expect_touch().times(0);

        let user = service(mock_repo).current_user("missing").await.unwrap();

        assert!(user.is_none());
    }
}
