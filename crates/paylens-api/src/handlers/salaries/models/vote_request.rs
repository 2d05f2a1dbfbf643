//! Vote request model

use serde::Deserialize;

/// Request body for POST /salaries/{id}/vote.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub is_upvote: bool,
}
