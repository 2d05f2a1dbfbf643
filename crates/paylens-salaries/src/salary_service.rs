//! Salary submissions: listing, moderation, voting, statistics.
//!
//! The service composes the two providers and owns the domain rules the
//! stores cannot express: new rows always start PENDING with a
//! server-assigned id and timestamp, statistics only ever see APPROVED
//! rows, and anonymous submissions leave the detail view with their
//! company name masked.

use paylens_commons::ids::SubmissionId;
use paylens_commons::models::{SalarySubmission, SalaryVote, SubmissionStatus};
use paylens_commons::time::now_millis;
use paylens_store::EntityStoreAsync;
use serde::Deserialize;
use tracing::Instrument;

use crate::errors::{SalaryError, SalaryResult};
use crate::providers::{SubmissionsProvider, VotesProvider};
use crate::stats::{summarize, SalaryStats};

/// Input for a new submission. Optional fields fall back to the domain
/// defaults: currency "USD", period "Yearly", anonymous.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub country: String,
    pub company: String,
    pub role: String,
    pub years_of_experience: Option<i32>,
    pub level: Option<String>,
    pub salary_amount: f64,
    pub currency: Option<String>,
    pub period: Option<String>,
    pub is_anonymous: Option<bool>,
    pub user_email: Option<String>,
}

/// One submission plus its vote tally.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDetail {
    pub submission: SalarySubmission,
    pub upvotes: usize,
    pub downvotes: usize,
    /// Upvotes minus downvotes; negative when the crowd disputes the figure.
    pub trust_score: i64,
}

/// Optional equality filters for the statistics query. Empty strings count
/// as absent, so `?country=` behaves like no filter at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsFilter {
    pub country: Option<String>,
    pub role: Option<String>,
    pub level: Option<String>,
}

impl StatsFilter {
    fn matches(&self, submission: &SalarySubmission) -> bool {
        field_matches(&self.country, &submission.country)
            && field_matches(&self.role, &submission.role)
            && field_matches(&self.level, &submission.level)
    }
}

/// Case-insensitive equality when a filter value is present and non-empty.
fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
    match wanted.as_deref() {
        Some(w) if !w.is_empty() => w.to_lowercase() == actual.to_lowercase(),
        _ => true,
    }
}

pub struct SalaryService {
    submissions: SubmissionsProvider,
    votes: VotesProvider,
}

impl SalaryService {
    pub fn new(submissions: SubmissionsProvider, votes: VotesProvider) -> Self {
        Self { submissions, votes }
    }

    /// All submissions, newest first.
    pub async fn list(&self) -> SalaryResult<Vec<SalarySubmission>> {
        let span = tracing::info_span!("salary.list");
        async move {
            let mut rows: Vec<SalarySubmission> = self
                .submissions
                .scan_all_async()
                .await?
                .into_iter()
                .map(|(_, submission)| submission)
                .collect();
            rows.sort_by_key(|s| std::cmp::Reverse(s.submitted_at));
            Ok(rows)
        }
        .instrument(span)
        .await
    }

    /// Records a submission. The server owns the id, the timestamp, and the
    /// initial status: whatever the client claims, new rows start PENDING.
    pub async fn submit(&self, new: NewSubmission) -> SalaryResult<SalarySubmission> {
        let span = tracing::info_span!("salary.submit", country = new.country.as_str());
        async move {
            let submission = SalarySubmission {
                id: SubmissionId::generate(),
                country: new.country,
                company: new.company,
                role: new.role,
                years_of_experience: new.years_of_experience.unwrap_or(0),
                level: new.level.unwrap_or_default(),
                salary_amount: new.salary_amount,
                currency: new.currency.unwrap_or_else(|| "USD".to_string()),
                period: new.period.unwrap_or_else(|| "Yearly".to_string()),
                is_anonymous: new.is_anonymous.unwrap_or(true),
                status: SubmissionStatus::Pending,
                user_email: new.user_email,
                submitted_at: now_millis(),
            };
            self.submissions
                .put_async(&submission.id, &submission)
                .await?;
            tracing::info!(submission_id = %submission.id, "Salary submission recorded");
            Ok(submission)
        }
        .instrument(span)
        .await
    }

    /// One submission with its vote tally. Anonymous submissions get the
    /// company name masked in the returned copy; the stored row keeps it.
    pub async fn detail(&self, id: &SubmissionId) -> SalaryResult<SubmissionDetail> {
        let span = tracing::info_span!("salary.detail", submission_id = %id);
        async move {
            let mut submission = self
                .submissions
                .get_async(id)
                .await?
                .ok_or(SalaryError::SubmissionNotFound)?;
            if submission.is_anonymous {
                submission.company = "Anonymous".to_string();
            }

            let votes = self.votes.votes_for_submission(id).await?;
            let upvotes = votes.iter().filter(|v| v.is_upvote).count();
            let downvotes = votes.len() - upvotes;

            Ok(SubmissionDetail {
                submission,
                upvotes,
                downvotes,
                trust_score: upvotes as i64 - downvotes as i64,
            })
        }
        .instrument(span)
        .await
    }

    /// Upserts the caller's vote. One row per (submission, voter): voting
    /// again replaces the earlier vote instead of stacking.
    pub async fn vote(
        &self,
        id: &SubmissionId,
        voter_email: &str,
        is_upvote: bool,
    ) -> SalaryResult<SalaryVote> {
        let span = tracing::info_span!("salary.vote", submission_id = %id);
        async move {
            if self.submissions.get_async(id).await?.is_none() {
                return Err(SalaryError::SubmissionNotFound);
            }

            let vote = SalaryVote {
                submission_id: id.clone(),
                voter_email: voter_email.to_string(),
                is_upvote,
                voted_at: now_millis(),
            };
            self.votes.put_async(&vote.key(), &vote).await?;
            tracing::debug!(is_upvote, "Vote recorded");
            Ok(vote)
        }
        .instrument(span)
        .await
    }

    /// Moves a submission to a new moderation status.
    pub async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> SalaryResult<SalarySubmission> {
        let span = tracing::info_span!("salary.update_status", submission_id = %id, status = %status);
        async move {
            let mut submission = self
                .submissions
                .get_async(id)
                .await?
                .ok_or(SalaryError::SubmissionNotFound)?;
            submission.status = status;
            self.submissions.put_async(id, &submission).await?;
            tracing::info!("Submission status updated");
            Ok(submission)
        }
        .instrument(span)
        .await
    }

    /// Aggregates APPROVED submissions matching the filter. An empty match
    /// set yields the all-zero summary.
    pub async fn stats(&self, filter: &StatsFilter) -> SalaryResult<SalaryStats> {
        let span = tracing::info_span!("salary.stats");
        async move {
            let amounts: Vec<f64> = self
                .submissions
                .scan_all_async()
                .await?
                .into_iter()
                .map(|(_, submission)| submission)
                .filter(|s| s.status == SubmissionStatus::Approved && filter.matches(s))
                .map(|s| s.salary_amount)
                .collect();
            Ok(summarize(amounts))
        }
        .instrument(span)
        .await
    }
}
