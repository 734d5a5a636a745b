//! Local username/password form checks
//!
//! Field-level validation run before the form is submitted to the auth
//! backend. Password hashing and verification stay server-side.

use crate::error::AuthError;

/// Username length bounds for registration.
const USERNAME_CHARS: std::ops::RangeInclusive<usize> = 3..=32;

/// Minimum password length for registration.
const MIN_PASSWORD_CHARS: usize = 6;

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Plaintext password as typed; never stored here.
    pub password: String,
}

impl Credentials {
    /// Check that both fields are present.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingUsername`] or [`AuthError::MissingPassword`].
    pub fn validate_login(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty() {
            return Err(AuthError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        Ok(())
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Desired account username.
    pub username: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation field.
    pub confirm_password: String,
    /// Optional display name; blank falls back to the username.
    pub display_name: String,
}

impl Registration {
    /// Check username format, password strength, and confirmation.
    ///
    /// # Errors
    ///
    /// First failing rule wins: [`AuthError::InvalidUsername`],
    /// [`AuthError::WeakPassword`], then [`AuthError::PasswordMismatch`].
    pub fn validate(&self) -> Result<(), AuthError> {
        let username = self.username.trim();
        if !USERNAME_CHARS.contains(&username.chars().count()) {
            return Err(AuthError::InvalidUsername(
                "must be 3 to 32 characters".to_string(),
            ));
        }
        if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AuthError::InvalidUsername(
                "only letters, digits, and underscores allowed".to_string(),
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::WeakPassword);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }

    /// Display name to register with; the username when left blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.display_name.trim();
        if name.is_empty() {
            self.username.trim()
        } else {
            name
        }
    }
}
