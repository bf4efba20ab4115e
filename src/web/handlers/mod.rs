//! HTML template rendering handlers for the login flow.

mod index;
mod login;
mod welcome;

pub use index::{LoginTemplate, index_handler};
pub use login::{LoginForm, login_handler, login_redirect_handler};
pub use welcome::{WelcomeTemplate, welcome_handler};
