//! Type-safe wrapper for user identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::StorageKey;

/// Type-safe wrapper for user identifiers.
///
/// Ensures user ids cannot be accidentally used where submission or token ids
/// are expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

/// Error type for UserId validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdValidationError(pub String);

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UserIdValidationError {}

impl UserId {
    /// Creates a new UserId from a string.
    ///
    /// # Panics
    /// Panics if the id fails validation. Use `try_new()` for fallible creation.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self::try_new(id).expect("UserId contains invalid characters")
    }

    /// Creates a new UserId from a string, returning an error if validation fails.
    ///
    /// Ids appear in storage keys and log lines, so separators, traversal
    /// sequences, and null bytes are rejected.
    pub fn try_new(id: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let id = id.into();
        validate_id(&id).map_err(UserIdValidationError)?;
        Ok(Self(id))
    }

    /// Generates a new unique UserId using NanoID (21 URL-safe characters).
    #[inline]
    pub fn generate() -> Self {
        Self(nanoid::nanoid!())
    }

    /// Returns the user id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner String.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

pub(crate) fn validate_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("id cannot be empty".to_string());
    }
    if id.contains("..") {
        return Err("id cannot contain '..' (path traversal)".to_string());
    }
    if id.contains('/') || id.contains('\\') {
        return Err("id cannot contain directory separators".to_string());
    }
    if id.contains('\0') {
        return Err("id cannot contain null bytes".to_string());
    }
    Ok(())
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    /// # Panics
    /// Panics if the string fails validation.
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for UserId {
    /// # Panics
    /// Panics if the string fails validation.
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StorageKey for UserId {
    fn storage_key(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map(UserId).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_id() {
        let user = UserId::try_new("u_abc123");
        assert!(user.is_ok());
        assert_eq!(user.unwrap().as_str(), "u_abc123");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 21);
    }

    #[test]
    fn test_path_traversal_blocked() {
        assert!(UserId::try_new("../../../etc/passwd").is_err());
        assert!(UserId::try_new("user/subdir").is_err());
        assert!(UserId::try_new("user\\subdir").is_err());
    }

    #[test]
    fn test_null_byte_blocked() {
        assert!(UserId::try_new("user\0hidden").is_err());
    }

    #[test]
    fn test_empty_id_blocked() {
        assert!(UserId::try_new("").is_err());
    }

    #[test]
    #[should_panic(expected = "invalid characters")]
    fn test_new_panics_on_invalid() {
        let _ = UserId::new("../evil");
    }

    #[test]
    fn test_storage_key_round_trip() {
        let id = UserId::generate();
        let bytes = id.storage_key();
        let decoded = UserId::from_storage_key(&bytes).unwrap();
        assert_eq!(id, decoded);
    }
}
