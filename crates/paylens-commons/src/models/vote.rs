//! Vote model for salary submissions.

use serde::{Deserialize, Serialize};

use crate::ids::{SubmissionId, VoteKey};

/// One caller's vote on one submission.
///
/// Stored under [`VoteKey`], so voting again replaces the previous row
/// rather than stacking votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryVote {
    pub submission_id: SubmissionId,
    /// Normalized email of the voter, taken from the access token.
    pub voter_email: String,
    pub is_upvote: bool,
    /// Unix milliseconds of the most recent vote from this voter.
    pub voted_at: i64,
}

impl SalaryVote {
    /// The composite row key for this vote.
    pub fn key(&self) -> VoteKey {
        VoteKey::new(self.submission_id.clone(), self.voter_email.clone())
    }
}
