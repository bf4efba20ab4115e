//! Application layer services implementing the login flow.
//!
//! Services combine the pure domain checks with the storage traits and give
//! the HTTP handlers a single call per use case.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Form login and session lookup

pub mod services;
