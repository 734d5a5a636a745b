//! Promptbox auth glue
//!
//! The pure parts of the login/registration screen:
//!
//! - **OAuth redirects** ([`oauth`]): build the provider authorization URL
//!   the browser is sent to. The code exchange, token handling, and session
//!   store live behind an external backend and are not modeled here.
//! - **Local credentials** ([`credentials`]): field-level checks for the
//!   username/password form, run client-side before anything is submitted.
//!
//! No network, no persistence, no secrets.

// Core modules
pub mod credentials;
pub mod error;
pub mod oauth;

// Re-exports for convenience
pub use credentials::{Credentials, Registration};
pub use error::AuthError;
pub use oauth::OauthProvider;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
