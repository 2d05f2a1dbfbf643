//! Moderation status handler
//!
//! PATCH /salaries/{id}/status - Updates the moderation status (auth required)

use actix_web::{web, HttpRequest, HttpResponse};

use paylens_auth::TokenIssuer;
use paylens_commons::models::SubmissionStatus;
use paylens_salaries::SalaryService;

use super::models::StatusUpdateRequest;
use super::{map_salary_error_to_response, parse_submission_id};
use crate::bearer::authenticate_request;
use crate::models::ErrorResponse;

/// PATCH /salaries/{id}/status
///
/// Accepts exactly PENDING, APPROVED, or REJECTED; anything else is a 400.
pub async fn update_status_handler(
    req: HttpRequest,
    path: web::Path<String>,
    issuer: web::Data<TokenIssuer>,
    service: web::Data<SalaryService>,
    body: web::Json<StatusUpdateRequest>,
) -> HttpResponse {
    if let Err(resp) = authenticate_request(&req, &issuer) {
        return resp;
    }
    let id = match parse_submission_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let status: SubmissionStatus = match body.status.parse() {
        Ok(status) => status,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                "bad_request",
                "Status must be PENDING, APPROVED, or REJECTED",
            ));
        }
    };

    match service.update_status(&id, status).await {
        Ok(updated) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Status updated to {}", updated.status)
        })),
        Err(err) => map_salary_error_to_response(err),
    }
}
