//! Repository trait for server-side login sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for sessions created by successful logins.
///
/// Sessions expire after an implementation-defined idle timeout. Expired
/// sessions behave exactly like unknown ones.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::InMemorySessionRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates and stores a new session holding `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session cannot be stored.
    async fn establish_session(&self, identity: &str) -> Result<Session, AppError>;

    /// Looks up a live session by id.
    ///
    /// Returns `Ok(None)` for unknown or expired sessions.
    async fn find(&self, id: &str) -> Result<Option<Session>, AppError>;

    /// Refreshes the last access time of a session.
    ///
    /// Unknown ids are ignored.
    async fn touch(&self, id: &str) -> Result<(), AppError>;

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no session has this id.
    async fn invalidate(&self, id: &str) -> Result<(), AppError>;

    /// Removes all expired sessions and returns how many were dropped.
    async fn purge_expired(&self) -> Result<usize, AppError>;

    /// Number of sessions currently stored.
    async fn active_count(&self) -> Result<usize, AppError>;
}
