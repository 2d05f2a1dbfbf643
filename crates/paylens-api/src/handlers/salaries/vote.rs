//! Vote handler
//!
//! POST /salaries/{id}/vote - Upserts the caller's vote (auth required)

use actix_web::{web, HttpRequest, HttpResponse};

use paylens_auth::TokenIssuer;
use paylens_salaries::SalaryService;

use super::models::VoteRequest;
use super::{map_salary_error_to_response, parse_submission_id};
use crate::bearer::authenticate_request;

/// POST /salaries/{id}/vote
///
/// The voter identity is the access token's subject, never the body, so a
/// caller cannot vote on someone else's behalf. Re-voting replaces the
/// earlier vote.
pub async fn vote_handler(
    req: HttpRequest,
    path: web::Path<String>,
    issuer: web::Data<TokenIssuer>,
    service: web::Data<SalaryService>,
    body: web::Json<VoteRequest>,
) -> HttpResponse {
    let claims = match authenticate_request(&req, &issuer) {
        Ok(claims) => claims,
        Err(resp) => return resp,
    };
    let id = match parse_submission_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match service.vote(&id, &claims.sub, body.is_upvote).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Vote recorded"
        })),
        Err(err) => map_salary_error_to_response(err),
    }
}
