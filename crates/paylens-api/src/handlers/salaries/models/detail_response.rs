//! Salary detail response model

use serde::Serialize;

use paylens_commons::ids::SubmissionId;
use paylens_commons::models::SubmissionStatus;
use paylens_salaries::SubmissionDetail;

/// Submission detail with the vote tally.
///
/// Unlike the listing row this is a public response, so the submitter email
/// is never included and the company arrives pre-masked for anonymous rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDetailResponse {
    pub id: SubmissionId,
    pub country: String,
    pub company: String,
    pub role: String,
    pub level: String,
    pub experience_years: i32,
    pub salary_amount: f64,
    pub currency: String,
    pub period: String,
    pub is_anonymous: bool,
    pub status: SubmissionStatus,
    pub submitted_at: i64,
    pub upvotes: usize,
    pub downvotes: usize,
    pub trust_score: i64,
}

impl From<SubmissionDetail> for SalaryDetailResponse {
    fn from(detail: SubmissionDetail) -> Self {
        let s = detail.submission;
        Self {
            id: s.id,
            country: s.country,
            company: s.company,
            role: s.role,
            level: s.level,
            experience_years: s.years_of_experience,
            salary_amount: s.salary_amount,
            currency: s.currency,
            period: s.period,
            is_anonymous: s.is_anonymous,
            status: s.status,
            submitted_at: s.submitted_at,
            upvotes: detail.upvotes,
            downvotes: detail.downvotes,
            trust_score: detail.trust_score,
        }
    }
}
