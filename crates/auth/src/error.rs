//! Account error types.

use thiserror::Error;

use crate::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

/// Errors that can occur during account operations.
///
/// The `Display` strings for validation and credential failures double as
/// the copy shown on the login and registration forms, so rewording them
/// is a user-visible change.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that already has an account.
    #[error("An account with this email already exists")]
    DuplicateEmail,

    /// Registration with a username below the minimum length.
    #[error("Username must be at least {} characters", MIN_USERNAME_LEN)]
    UsernameTooShort,

    /// Registration with a password below the minimum length.
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,

    /// Login with an email that has no account.
    #[error("No account found with this email")]
    UnknownEmail,

    /// Login with a password that does not match.
    #[error("Incorrect password")]
    BadCredentials,

    /// Underlying storage failure.
    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// Persisted state could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for account operations.
pub type AuthResult<T> = Result<T, AuthError>;
