//! Session storage implementations.
//!
//! - [`InMemorySessionRepository`] - Process-local store with idle expiry

mod in_memory;

pub use in_memory::{InMemorySessionRepository, run_session_purger};
