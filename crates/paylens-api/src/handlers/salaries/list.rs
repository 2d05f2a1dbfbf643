//! Salary listing handler
//!
//! GET /salaries - Lists all submissions, newest first (auth required)

use actix_web::{web, HttpRequest, HttpResponse};

use paylens_auth::TokenIssuer;
use paylens_salaries::SalaryService;

use super::models::SalaryResponse;
use super::map_salary_error_to_response;
use crate::bearer::authenticate_request;

/// GET /salaries
///
/// Full rows, including the submitter email where present; this listing is
/// only served to authenticated callers.
pub async fn list_salaries_handler(
    req: HttpRequest,
    issuer: web::Data<TokenIssuer>,
    service: web::Data<SalaryService>,
) -> HttpResponse {
    if let Err(resp) = authenticate_request(&req, &issuer) {
        return resp;
    }

    match service.list().await {
        Ok(rows) => HttpResponse::Ok().json(
            rows.into_iter()
                .map(SalaryResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_salary_error_to_response(err),
    }
}
