//! Salary handlers
//!
//! Submission, listing, voting, moderation, and statistics endpoints over
//! the salary service. Submission and the public reads (detail, stats) are
//! unauthenticated; everything else requires a bearer token.
//!
//! ## Endpoints
//! - GET /salaries - List all submissions, newest first (auth)
//! - POST /salaries - Create a submission (public)
//! - GET /salaries/stats - Aggregate statistics over approved rows (public)
//! - GET /salaries/{id} - Submission detail with the vote tally (public)
//! - POST /salaries/{id}/vote - Upsert the caller's vote (auth)
//! - PATCH /salaries/{id}/status - Update moderation status (auth)

pub mod models;

mod detail;
mod list;
mod stats;
mod status;
mod submit;
mod vote;

pub use detail::salary_detail_handler;
pub use list::list_salaries_handler;
pub use stats::salary_stats_handler;
pub use status::update_status_handler;
pub use submit::submit_salary_handler;
pub use vote::vote_handler;

use actix_web::HttpResponse;

use paylens_commons::ids::SubmissionId;
use paylens_salaries::SalaryError;

use crate::models::ErrorResponse;

/// Map salary errors to HTTP responses
pub(crate) fn map_salary_error_to_response(err: SalaryError) -> HttpResponse {
    match err {
        SalaryError::SubmissionNotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", err.to_string()))
        }
        SalaryError::StoreUnavailable(_) => {
            log::error!("Salary operation failed: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Salary operation failed"))
        }
    }
}

/// Parses the path id, rejecting separators and traversal sequences with a
/// 400 before the store ever sees the value.
pub(crate) fn parse_submission_id(raw: &str) -> Result<SubmissionId, HttpResponse> {
    SubmissionId::try_new(raw).map_err(|_| {
        HttpResponse::BadRequest()
            .json(ErrorResponse::new("bad_request", "Invalid submission id"))
    })
}
