//! Registration error types.

use thiserror::Error;

/// Reasons a registration attempt is rejected.
///
/// The display strings double as the user-facing rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The address does not have the shape of an email address.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Another account already uses this address.
    #[error("Email already registered")]
    DuplicateEmail,

    /// The password is too short or missing a required character class.
    #[error("Password does not meet requirements")]
    WeakPassword,
}
