//! Type-safe identifier newtypes.
//!
//! Wrapping ids in dedicated types prevents a submission id from being used
//! where a user id is expected, at compile time.

mod submission_id;
mod token_id;
mod user_id;
mod vote_key;

pub use submission_id::{SubmissionId, SubmissionIdValidationError};
pub use token_id::TokenId;
pub use user_id::{UserId, UserIdValidationError};
pub use vote_key::VoteKey;
