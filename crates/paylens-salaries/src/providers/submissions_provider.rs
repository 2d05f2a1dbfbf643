//! Salary submission rows, keyed by submission id.

use std::sync::Arc;

use paylens_commons::ids::SubmissionId;
use paylens_commons::models::SalarySubmission;
use paylens_store::{EntityStore, StorageBackend};

pub const SALARY_SUBMISSIONS_PARTITION: &str = "salary_submissions";

/// Typed store over the `salary_submissions` partition.
///
/// Plain entity CRUD; no secondary index. The submission corpus is small
/// enough that listing and statistics run off a partition scan.
#[derive(Clone)]
pub struct SubmissionsProvider {
    backend: Arc<dyn StorageBackend>,
}

impl SubmissionsProvider {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }
}

impl EntityStore<SubmissionId, SalarySubmission> for SubmissionsProvider {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        SALARY_SUBMISSIONS_PARTITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylens_commons::models::SubmissionStatus;
    use paylens_store::InMemoryBackend;

    fn submission(id: &SubmissionId) -> SalarySubmission {
        SalarySubmission {
            id: id.clone(),
            country: "Germany".to_string(),
            company: "Acme GmbH".to_string(),
            role: "Backend Engineer".to_string(),
            years_of_experience: 6,
            level: "Senior".to_string(),
            salary_amount: 95_000.0,
            currency: "EUR".to_string(),
            period: "Yearly".to_string(),
            is_anonymous: true,
            status: SubmissionStatus::Pending,
            user_email: None,
            submitted_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_round_trip_by_id() {
        let provider = SubmissionsProvider::new(Arc::new(InMemoryBackend::new()));
        let id = SubmissionId::generate();
        provider.put(&id, &submission(&id)).unwrap();

        let read_back = provider.get(&id).unwrap().unwrap();
        assert_eq!(read_back.company, "Acme GmbH");
        assert_eq!(read_back.status, SubmissionStatus::Pending);

        assert!(provider.get(&SubmissionId::new("missing")).unwrap().is_none());
    }
}
