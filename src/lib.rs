//! # Login Demo
//!
//! A minimal server-rendered login flow built with Axum.
//!
//! A submitted email/password pair is checked against a fixed allow-list.
//! On success a server-side session is created and the welcome page is
//! rendered; otherwise the login page is shown again with a single,
//! undifferentiated error message.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Allow-list, credential check, session entity and storage trait
//! - **Application Layer** ([`application`]) - Login orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory session store
//! - **Web Layer** ([`web`]) - HTML pages, form handling and session cookies
//! - **API Layer** ([`api`]) - Health endpoint and HTTP tracing
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:8080/ and sign in as user@example.com / password123
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
