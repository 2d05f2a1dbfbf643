//! Auth domain errors.
//!
//! Display strings for credential and token failures are deliberately
//! generic: they never reveal whether an email exists or why exactly a token
//! was rejected.

use std::fmt;

use paylens_store::StorageError;

/// Result type for auth operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors from the identity domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signup with an email that is already registered
    DuplicateUser,

    /// Unknown email or wrong password; callers cannot tell which
    InvalidCredentials,

    /// Refresh token missing, unknown, expired, revoked, or already rotated
    InvalidOrExpiredToken,

    /// Storage layer failure; retryable
    StoreUnavailable(String),

    /// Invalid signing key or TTL settings; fatal at startup
    ConfigurationError(String),

    /// bcrypt or JWT signing failure
    HashingError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateUser => write!(f, "User already exists."),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials."),
            AuthError::InvalidOrExpiredToken => write!(f, "Invalid or expired refresh token."),
            AuthError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
            AuthError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AuthError::HashingError(msg) => write!(f, "Hashing error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StorageError> for AuthError {
    /// Unique-constraint violations are handled by the providers where the
    /// violated index is known; anything reaching this conversion is an
    /// availability problem.
    fn from(err: StorageError) -> Self {
        AuthError::StoreUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_messages_are_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials.");
        assert_eq!(
            AuthError::InvalidOrExpiredToken.to_string(),
            "Invalid or expired refresh token."
        );
    }

    #[test]
    fn test_storage_error_maps_to_store_unavailable() {
        let err: AuthError = StorageError::IoError("disk full".to_string()).into();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));
    }
}
