//! Vote rows, keyed by (submission id, voter email).
//!
//! The composite key is the upsert mechanism: a voter changing their mind
//! writes the same key again, so no read-modify-write or uniqueness check is
//! needed. All votes for one submission share a key prefix, which is how the
//! tally query collects them.

use std::sync::Arc;

use paylens_commons::ids::{SubmissionId, VoteKey};
use paylens_commons::models::SalaryVote;
use paylens_store::{EntityStore, EntityStoreAsync, StorageBackend};

pub const SALARY_VOTES_PARTITION: &str = "salary_votes";

/// Typed store over the `salary_votes` partition.
#[derive(Clone)]
pub struct VotesProvider {
    backend: Arc<dyn StorageBackend>,
}

impl VotesProvider {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Every vote cast on one submission, via prefix scan.
    pub async fn votes_for_submission(
        &self,
        submission_id: &SubmissionId,
    ) -> paylens_store::Result<Vec<SalaryVote>> {
        let prefix = VoteKey::submission_prefix(submission_id);
        let rows = self.scan_prefix_bytes_async(prefix, None).await?;
        Ok(rows.into_iter().map(|(_, vote)| vote).collect())
    }
}

impl EntityStore<VoteKey, SalaryVote> for VotesProvider {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        SALARY_VOTES_PARTITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylens_store::InMemoryBackend;

    fn provider() -> VotesProvider {
        VotesProvider::new(Arc::new(InMemoryBackend::new()))
    }

    fn vote(submission_id: &SubmissionId, voter: &str, is_upvote: bool) -> SalaryVote {
        SalaryVote {
            submission_id: submission_id.clone(),
            voter_email: voter.to_string(),
            is_upvote,
            voted_at: 1_700_000_000_000,
        }
    }

    #[tokio::test]
    async fn test_same_voter_overwrites_own_vote() {
        let provider = provider();
        let submission = SubmissionId::new("s_1");

        let first = vote(&submission, "alice@example.com", true);
        provider.put(&first.key(), &first).unwrap();

        let changed = vote(&submission, "alice@example.com", false);
        provider.put(&changed.key(), &changed).unwrap();

        let votes = provider.votes_for_submission(&submission).await.unwrap();
        assert_eq!(votes.len(), 1, "re-voting must replace, not add");
        assert!(!votes[0].is_upvote);
    }

    #[tokio::test]
    async fn test_prefix_scan_isolates_submissions() {
        let provider = provider();
        let first = SubmissionId::new("s_1");
        let other = SubmissionId::new("s_10");

        for voter in ["alice@example.com", "bob@example.com"] {
            let v = vote(&first, voter, true);
            provider.put(&v.key(), &v).unwrap();
        }
        let stray = vote(&other, "carol@example.com", false);
        provider.put(&stray.key(), &stray).unwrap();

        let votes = provider.votes_for_submission(&first).await.unwrap();
        assert_eq!(votes.len(), 2);
        assert!(votes.iter().all(|v| v.submission_id == first));
    }

    #[tokio::test]
    async fn test_unvoted_submission_has_no_rows() {
        let provider = provider();
        let votes = provider
            .votes_for_submission(&SubmissionId::new("s_unvoted"))
            .await
            .unwrap();
        assert!(votes.is_empty());
    }
}
