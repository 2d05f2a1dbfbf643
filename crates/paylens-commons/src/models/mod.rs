//! Domain models shared across crates.
//!
//! These are the persisted row types. API request/response shapes live in
//! `paylens-api`; rows here serialize with serde for the entity stores.

mod refresh_token;
mod submission;
mod user;
mod vote;

pub use refresh_token::RefreshToken;
pub use submission::{SalarySubmission, SubmissionStatus};
pub use user::{normalize_email, User};
pub use vote::SalaryVote;
