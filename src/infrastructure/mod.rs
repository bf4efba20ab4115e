//! Infrastructure layer implementing the domain storage interfaces.
//!
//! # Modules
//!
//! - [`session`] - Session repository implementations

pub mod session;
