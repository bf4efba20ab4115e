//! Domain entity representing an authenticated browser session.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

/// Number of random bytes in a session identifier (hex-encoded to 64 chars).
const SESSION_ID_BYTES: usize = 32;

/// Server-side record tying a session cookie to an authenticated email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub authenticated_user: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for `authenticated_user` with a fresh random id.
    pub fn new(authenticated_user: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_session_id(),
            authenticated_user: authenticated_user.into(),
            created_at: now,
            last_accessed_at: now,
        }
    }

    /// Returns true if the session has been idle for longer than `idle_timeout`.
    pub fn is_expired(&self, idle_timeout: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_accessed_at > idle_timeout
    }

    /// Records an access at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed_at = now;
    }
}

fn generate_session_id() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
