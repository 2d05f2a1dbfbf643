//! Composite key for salary votes.

use serde::{Deserialize, Serialize};

use super::SubmissionId;
use crate::StorageKey;

/// Composite key identifying one caller's vote on one submission.
///
/// Encoded as `"{submission_id}:{voter_email}"`, which makes re-voting an
/// overwrite of the same row and lets a prefix scan on
/// `"{submission_id}:"` collect every vote for a submission.
/// `SubmissionId` rejects ':' so the encoding is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteKey {
    pub submission_id: SubmissionId,
    pub voter_email: String,
}

impl VoteKey {
    pub fn new(submission_id: SubmissionId, voter_email: impl Into<String>) -> Self {
        Self {
            submission_id,
            voter_email: voter_email.into(),
        }
    }

    /// Byte prefix matching every vote for the given submission.
    pub fn submission_prefix(submission_id: &SubmissionId) -> Vec<u8> {
        format!("{}:", submission_id.as_str()).into_bytes()
    }
}

impl StorageKey for VoteKey {
    fn storage_key(&self) -> Vec<u8> {
        format!("{}:{}", self.submission_id.as_str(), self.voter_email).into_bytes()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        let raw = String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())?;
        let (submission, voter) = raw
            .split_once(':')
            .ok_or_else(|| format!("malformed vote key: {}", raw))?;
        let submission_id =
            SubmissionId::try_new(submission.to_string()).map_err(|e| e.to_string())?;
        Ok(Self::new(submission_id, voter.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let key = VoteKey::new(SubmissionId::new("s_1"), "alice@example.com");
        let decoded = VoteKey::from_storage_key(&key.storage_key()).unwrap();
        assert_eq!(key, decoded);
    }

    #[test]
    fn test_prefix_matches_own_key() {
        let submission = SubmissionId::new("s_1");
        let key = VoteKey::new(submission.clone(), "alice@example.com");
        let prefix = VoteKey::submission_prefix(&submission);
        assert!(key.storage_key().starts_with(&prefix));
    }

    #[test]
    fn test_prefix_does_not_match_other_submission() {
        let key = VoteKey::new(SubmissionId::new("s_10"), "alice@example.com");
        let prefix = VoteKey::submission_prefix(&SubmissionId::new("s_1"));
        assert!(!key.storage_key().starts_with(&prefix));
    }

    #[test]
    fn test_malformed_key_rejected() {
        assert!(VoteKey::from_storage_key(b"no-separator").is_err());
    }
}
