//! Domain layer containing the credential check and session model.
//!
//! # Architecture
//!
//! - [`credentials`] - Allow-list and the pure [`credentials::CredentialStore::authenticate`] check
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependencies on the web or infrastructure layers.
//! Session creation and view rendering are driven from
//! [`crate::application::services`] and [`crate::web`].

pub mod credentials;
pub mod entities;
pub mod repositories;
