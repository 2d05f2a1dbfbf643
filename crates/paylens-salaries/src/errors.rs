//! Salary domain errors.

use std::fmt;

use paylens_store::StorageError;

/// Result type for salary operations.
pub type SalaryResult<T> = std::result::Result<T, SalaryError>;

/// Errors from the salary domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryError {
    /// No submission exists under the requested id
    SubmissionNotFound,

    /// Storage layer failure; retryable
    StoreUnavailable(String),
}

impl fmt::Display for SalaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryError::SubmissionNotFound => write!(f, "Submission not found."),
            SalaryError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SalaryError {}

impl From<StorageError> for SalaryError {
    fn from(err: StorageError) -> Self {
        SalaryError::StoreUnavailable(err.to_string())
    }
}
