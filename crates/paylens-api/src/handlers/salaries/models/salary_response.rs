//! Salary row response model

use serde::Serialize;

use paylens_commons::ids::SubmissionId;
use paylens_commons::models::{SalarySubmission, SubmissionStatus};

/// One submission as returned by the authenticated listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResponse {
    pub id: SubmissionId,
    pub country: String,
    pub company: String,
    pub role: String,
    pub experience_years: i32,
    pub level: String,
    pub salary_amount: f64,
    pub currency: String,
    pub period: String,
    pub is_anonymous: bool,
    pub status: SubmissionStatus,
    pub user_email: Option<String>,
    pub submitted_at: i64,
}

impl From<SalarySubmission> for SalaryResponse {
    fn from(s: SalarySubmission) -> Self {
        Self {
            id: s.id,
            country: s.country,
            company: s.company,
            role: s.role,
            experience_years: s.years_of_experience,
            level: s.level,
            salary_amount: s.salary_amount,
            currency: s.currency,
            period: s.period,
            is_anonymous: s.is_anonymous,
            status: s.status,
            user_email: s.user_email,
            submitted_at: s.submitted_at,
        }
    }
}
