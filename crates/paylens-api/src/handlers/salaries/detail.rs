//! Salary detail handler
//!
//! GET /salaries/{id} - Submission detail with the vote tally (public)

use actix_web::{web, HttpResponse};

use paylens_salaries::SalaryService;

use super::models::SalaryDetailResponse;
use super::{map_salary_error_to_response, parse_submission_id};

/// GET /salaries/{id}
///
/// Public: the service masks the company for anonymous rows and the
/// response model drops the submitter email entirely.
pub async fn salary_detail_handler(
    path: web::Path<String>,
    service: web::Data<SalaryService>,
) -> HttpResponse {
    let id = match parse_submission_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match service.detail(&id).await {
        Ok(detail) => HttpResponse::Ok().json(SalaryDetailResponse::from(detail)),
        Err(err) => map_salary_error_to_response(err),
    }
}
