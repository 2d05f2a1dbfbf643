// Paylens shared library
// Typed identifiers, domain models, and storage-key encoding shared by every crate.

pub mod ids;
pub mod models;
pub mod storage_key;
pub mod time;

// Re-export commonly used types
pub use ids::{SubmissionId, TokenId, UserId, VoteKey};
pub use models::{normalize_email, RefreshToken, SalarySubmission, SalaryVote, SubmissionStatus, User};
pub use storage_key::StorageKey;
