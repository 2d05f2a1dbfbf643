//! Type-safe wrapper for salary-submission identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user_id::validate_id;
use crate::StorageKey;

/// Type-safe wrapper for salary-submission identifiers.
///
/// Submission ids arrive in URL paths, so creation from untrusted input goes
/// through `try_new`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(String);

/// Error type for SubmissionId validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionIdValidationError(pub String);

impl fmt::Display for SubmissionIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SubmissionIdValidationError {}

impl SubmissionId {
    /// # Panics
    /// Panics if the id fails validation. Use `try_new()` for untrusted input.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self::try_new(id).expect("SubmissionId contains invalid characters")
    }

    /// Creates a SubmissionId, rejecting separators, traversal sequences,
    /// null bytes, and the ':' used in composite vote keys.
    pub fn try_new(id: impl Into<String>) -> Result<Self, SubmissionIdValidationError> {
        let id = id.into();
        validate_id(&id).map_err(SubmissionIdValidationError)?;
        if id.contains(':') {
            return Err(SubmissionIdValidationError(
                "id cannot contain ':' (reserved key separator)".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Generates a new unique SubmissionId using NanoID.
    #[inline]
    pub fn generate() -> Self {
        Self(nanoid::nanoid!())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SubmissionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StorageKey for SubmissionId {
    fn storage_key(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map(SubmissionId).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_id() {
        assert!(SubmissionId::try_new("s_xyz789").is_ok());
    }

    #[test]
    fn test_colon_rejected() {
        let err = SubmissionId::try_new("bad:id");
        assert!(err.is_err());
        assert!(err.unwrap_err().0.contains("separator"));
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(SubmissionId::try_new("../other").is_err());
        assert!(SubmissionId::try_new("").is_err());
    }
}
