//! Salary submission model and its moderation status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::SubmissionId;

/// Moderation state of a submission.
///
/// New submissions always start as `Pending`; only `Approved` rows feed the
/// public statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "PENDING",
            SubmissionStatus::Approved => "APPROVED",
            SubmissionStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    /// Parses the exact wire strings. Anything else, including lowercase
    /// variants, is rejected so moderation updates stay unambiguous.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(SubmissionStatus::Pending),
            "APPROVED" => Ok(SubmissionStatus::Approved),
            "REJECTED" => Ok(SubmissionStatus::Rejected),
            other => Err(format!("unknown submission status: {}", other)),
        }
    }
}

/// One reported salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySubmission {
    pub id: SubmissionId,
    pub country: String,
    pub company: String,
    pub role: String,
    pub years_of_experience: i32,
    pub level: String,
    pub salary_amount: f64,
    /// ISO currency code, defaults to "USD" when the submitter omits it.
    pub currency: String,
    /// Pay period, defaults to "Yearly".
    pub period: String,
    /// Anonymous submissions have their company name masked in detail views.
    pub is_anonymous: bool,
    pub status: SubmissionStatus,
    /// Present when the submitter was signed in.
    pub user_email: Option<String>,
    /// Unix milliseconds, assigned by the server at submission time.
    pub submitted_at: i64,
}
