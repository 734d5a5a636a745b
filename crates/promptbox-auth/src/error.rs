//! Error types for the auth glue
//!
//! All errors are user-facing form feedback; none abort the caller.

/// Errors from OAuth URL construction and credential checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Provider is missing its endpoint, client id, or redirect URI.
    #[error("oauth provider is not configured")]
    NotConfigured,

    /// Login form submitted without a username.
    #[error("username must not be empty")]
    MissingUsername,

    /// Login form submitted without a password.
    #[error("password must not be empty")]
    MissingPassword,

    /// Registration username failed a format rule.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Registration password is too short.
    #[error("password must be at least 6 characters")]
    WeakPassword,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}
