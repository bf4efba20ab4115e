//! Process-local session storage.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Session store backed by a `HashMap` behind an async `RwLock`.
///
/// Sessions idle for longer than `idle_timeout` are treated as absent on
/// lookup and removed lazily, or eagerly by [`run_session_purger`].
/// Contents are lost when the process exits.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
    idle_timeout: Duration,
}

impl InMemorySessionRepository {
    /// Creates an empty store with the given idle timeout.
    pub fn new(idle_timeout: StdDuration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: Duration::from_std(idle_timeout)
                .unwrap_or_else(|_| Duration::weeks(52)),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn establish_session(&self, identity: &str) -> Result<Session, AppError> {
        let session = Session::new(identity);
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        debug!("Session established");
        Ok(session)
    }

    async fn find(&self, id: &str) -> Result<Option<Session>, AppError> {
        let now = Utc::now();

        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                None => return Ok(None),
                Some(session) if !session.is_expired(self.idle_timeout, now) => {
                    return Ok(Some(session.clone()));
                }
                Some(_) => {}
            }
        }

        // Expired: drop it, re-checking under the write lock since another
        // request may have touched it in between.
        let mut sessions = self.sessions.write().await;
        match sessions.get(id) {
            Some(session) if session.is_expired(self.idle_timeout, now) => {
                sessions.remove(id);
                debug!("Expired session removed on lookup");
                Ok(None)
            }
            other => Ok(other.cloned()),
        }
    }

    async fn touch(&self, id: &str) -> Result<(), AppError> {
        if let Some(session) = self.sessions.write().await.get_mut(id) {
            session.touch(Utc::now());
        }
        Ok(())
    }

    async fn invalidate(&self, id: &str) -> Result<(), AppError> {
        match self.sessions.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Session not found", json!({}))),
        }
    }

    async fn purge_expired(&self) -> Result<usize, AppError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.idle_timeout, now));
        Ok(before - sessions.len())
    }

    async fn active_count(&self) -> Result<usize, AppError> {
        Ok(self.sessions.read().await.len())
    }
}

/// Periodically removes expired sessions until the task is aborted.
pub async fn run_session_purger(repository: Arc<dyn SessionRepository>, interval: StdDuration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        match repository.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => tracing::info!(purged, "Purged expired sessions"),
            Err(e) => tracing::error!("Session purge failed: {}", e),
        }
    }
}
