//! Salary submission handler
//!
//! POST /salaries - Creates a submission (public)

use actix_web::{web, HttpResponse};

use paylens_salaries::SalaryService;

use super::map_salary_error_to_response;
use super::models::SubmitSalaryRequest;

/// POST /salaries
///
/// Anonymous submissions are the product default, so no token is required.
/// The response only acknowledges the moderation queue; the row id stays
/// internal until moderation approves it into the listing.
pub async fn submit_salary_handler(
    service: web::Data<SalaryService>,
    body: web::Json<SubmitSalaryRequest>,
) -> HttpResponse {
    match service.submit(body.into_inner().into()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Submitted (PENDING)"
        })),
        Err(err) => map_salary_error_to_response(err),
    }
}
