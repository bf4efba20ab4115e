//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SESSION_COOKIE_NAME` - Name of the session cookie (default: `session_id`)
//! - `SESSION_IDLE_TIMEOUT_SECONDS` - Idle time before a session expires (default: 1800)
//! - `SESSION_PURGE_INTERVAL_SECONDS` - Expired session sweep interval (default: 60)
//! - `SECURE_COOKIES` - Add the `Secure` attribute to the session cookie (default: false)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub session_cookie_name: String,
    /// Seconds a session may stay unused before it is discarded.
    pub session_idle_timeout: u64,
    pub session_purge_interval: u64,
    /// Only enable when the service is served over HTTPS.
    pub secure_cookies: bool,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            session_cookie_name: "session_id".to_string(),
            session_idle_timeout: 1800,
            session_purge_interval: 60,
            secure_cookies: false,
            static_dir: "static".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let session_cookie_name =
            env::var("SESSION_COOKIE_NAME").unwrap_or(defaults.session_cookie_name);

        let session_idle_timeout = env::var("SESSION_IDLE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.session_idle_timeout);

        let session_purge_interval = env::var("SESSION_PURGE_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.session_purge_interval);

        let secure_cookies = env::var("SECURE_COOKIES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.secure_cookies);

        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            session_cookie_name,
            session_idle_timeout,
            session_purge_interval,
            secure_cookies,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `session_cookie_name` is empty or contains characters not allowed in a cookie name
    /// - `session_idle_timeout` or `session_purge_interval` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_cookie_name.is_empty()
            || !self
                .session_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "SESSION_COOKIE_NAME must be non-empty and contain only [A-Za-z0-9_-], got '{}'",
                self.session_cookie_name
            );
        }

        if self.session_idle_timeout == 0 {
            anyhow::bail!("SESSION_IDLE_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.session_purge_interval == 0 {
            anyhow::bail!("SESSION_PURGE_INTERVAL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout)
    }

    pub fn session_purge_interval(&self) -> Duration {
        Duration::from_secs(self.session_purge_interval)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Session cookie: {}", self.session_cookie_name);
        tracing::info!("  Session idle timeout: {}s", self.session_idle_timeout);
        tracing::info!("  Secure cookies: {}", self.secure_cookies);
        tracing::info!("  Static dir: {}", self.static_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "LOG_FORMAT",
        "SESSION_COOKIE_NAME",
        "SESSION_IDLE_TIMEOUT_SECONDS",
        "SESSION_PURGE_INTERVAL_SECONDS",
        "SECURE_COOKIES",
        "STATIC_DIR",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(1800));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.session_cookie_name = String::new();
        assert!(config.validate().is_err());

        config.session_cookie_name = "bad;name".to_string();
        assert!(config.validate().is_err());

        config.session_cookie_name = "JSESSIONID".to_string();
        assert!(config.validate().is_ok());

        config.session_idle_timeout = 0;
        assert!(config.validate().is_err());

        config.session_idle_timeout = 60;
        config.session_purge_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.session_cookie_name, "session_id");
        assert_eq!(config.session_idle_timeout, 1800);
        assert!(!config.secure_cookies);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("SESSION_COOKIE_NAME", "login_session");
            env::set_var("SESSION_IDLE_TIMEOUT_SECONDS", "600");
            env::set_var("SECURE_COOKIES", "TRUE");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.session_cookie_name, "login_session");
        assert_eq!(config.session_idle_timeout, 600);
        assert!(config.secure_cookies);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_numbers_fall_back_to_defaults() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SESSION_IDLE_TIMEOUT_SECONDS", "thirty minutes");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.session_idle_timeout, 1800);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
