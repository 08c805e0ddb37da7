//! Presence validation for the login/registration form.
//!
//! The store itself accepts whatever strings it is handed, empty or not.
//! Rejecting a half-filled form is the window's job; it lives here so every
//! front end applies the same rule and shows the same message. Any empty
//! field blocks the submit; whitespace counts as filled.

use thiserror::Error;

use crate::messages;

/// Why raw form input was rejected before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// At least one field was left empty.
    #[error("{}", messages::FILL_ALL_FIELDS)]
    EmptyField,
}

impl FormError {
    /// Display text for the message box.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyField => messages::FILL_ALL_FIELDS,
        }
    }
}

/// Check both fields are present before calling
/// [`CredentialStore::register`](crate::store::CredentialStore::register).
pub fn validate(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() || password.is_empty() {
        return Err(FormError::EmptyField);
    }
    Ok(())
}
