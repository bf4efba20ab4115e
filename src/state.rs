//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::config::Config;
use crate::domain::credentials::CredentialStore;
use crate::infrastructure::session::InMemorySessionRepository;

/// Session cookie attributes derived from [`Config`].
#[derive(Debug, Clone)]
pub struct SessionCookieSettings {
    pub name: String,
    pub secure: bool,
}

impl From<&Config> for SessionCookieSettings {
    fn from(config: &Config) -> Self {
        Self {
            name: config.session_cookie_name.clone(),
            secure: config.secure_cookies,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService<InMemorySessionRepository>>,
    pub sessions: Arc<InMemorySessionRepository>,
    pub cookie: SessionCookieSettings,
}

impl AppState {
    /// Wires the login service to the given credential and session stores.
    pub fn new(
        credentials: Arc<CredentialStore>,
        sessions: Arc<InMemorySessionRepository>,
        cookie: SessionCookieSettings,
    ) -> Self {
        let login_service = Arc::new(LoginService::new(credentials, sessions.clone()));
        Self {
            login_service,
            sessions,
            cookie,
        }
    }

    /// State with the demo allow-list and an empty session store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(CredentialStore::default()),
            Arc::new(InMemorySessionRepository::new(
                config.session_idle_timeout(),
            )),
            SessionCookieSettings::from(config),
        )
    }
}
