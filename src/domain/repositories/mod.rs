//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contracts; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`SessionRepository`] - Login session storage

pub mod session_repository;

pub use session_repository::SessionRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
