//! Credential allow-list and the pure credential check.

use std::collections::HashMap;

/// Message shown for every failed login attempt.
///
/// The same text is used for empty fields, unknown emails and wrong
/// passwords so the login page never reveals which part was incorrect.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Accounts accepted by the demo deployment.
const DEFAULT_ACCOUNTS: &[(&str, &str)] = &[
    ("user@example.com", "password123"),
    ("admin@example.com", "adminpass"),
];

/// Outcome of a credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// Credentials matched. `email` is the trimmed input as the user typed it.
    Authenticated { email: String },
    Unauthenticated,
}

/// Immutable email/password allow-list.
///
/// Keys are stored lower-case; lookups lower-case the submitted email first.
/// The store is built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    accounts: HashMap<String, String>,
}

impl CredentialStore {
    /// Builds a store from `(email, password)` pairs.
    ///
    /// Emails are lower-cased on insert. Later duplicates replace earlier ones.
    pub fn new<I, E, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: AsRef<str>,
        P: Into<String>,
    {
        let accounts = accounts
            .into_iter()
            .map(|(email, password)| (email.as_ref().to_lowercase(), password.into()))
            .collect();

        Self { accounts }
    }

    /// Checks a submitted email/password pair.
    ///
    /// Absent values count as empty. Both fields are trimmed of ASCII control
    /// characters and spaces (anything up to `U+0020`); the email is
    /// lower-cased for lookup only and the password is compared exactly.
    /// Never fails: every input maps to one of the two [`AuthResult`] variants.
    pub fn authenticate(&self, email: Option<&str>, password: Option<&str>) -> AuthResult {
        let email = trim_to_empty(email);
        let password = trim_to_empty(password);

        if email.is_empty() || password.is_empty() {
            return AuthResult::Unauthenticated;
        }

        match self.accounts.get(&email.to_lowercase()) {
            Some(expected) if expected == password => AuthResult::Authenticated {
                email: email.to_string(),
            },
            _ => AuthResult::Unauthenticated,
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNTS.iter().copied())
    }
}

fn trim_to_empty(value: Option<&str>) -> &str {
    value
        .map(|v| v.trim_matches(|c: char| c <= ' '))
        .unwrap_or_default()
}
