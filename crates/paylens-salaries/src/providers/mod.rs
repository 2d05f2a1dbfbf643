//! Storage-backed stores for submissions and votes.

mod submissions_provider;
mod votes_provider;

pub use submissions_provider::{SubmissionsProvider, SALARY_SUBMISSIONS_PARTITION};
pub use votes_provider::{VotesProvider, SALARY_VOTES_PARTITION};

/// Every partition the salary domain needs; the server opens the storage
/// backend with this set.
pub const SALARY_PARTITIONS: [&str; 2] = [SALARY_SUBMISSIONS_PARTITION, SALARY_VOTES_PARTITION];
