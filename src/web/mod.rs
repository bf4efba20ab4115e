//! Web layer for the browser-facing login flow.
//!
//! Renders server-side HTML with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`middleware`] - Session cookie middleware
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
