//! Core domain entities.
//!
//! - [`Session`] - A server-side session created by a successful login

pub mod session;

pub use session::Session;
