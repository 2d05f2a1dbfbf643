//! Bearer-token authentication for protected endpoints.
//!
//! Protected handlers call [`authenticate_request`] first and return the
//! prepared 401 on failure. The message never says whether the header was
//! missing, malformed, or carried a bad token.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpRequest, HttpResponse};

use paylens_auth::{AccessClaims, TokenIssuer};

use crate::models::ErrorResponse;

/// Validates the caller's access token from the Authorization header.
pub fn authenticate_request(
    req: &HttpRequest,
    issuer: &TokenIssuer,
) -> Result<AccessClaims, HttpResponse> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(unauthorized)?;

    issuer
        .validate_access_token(token)
        .map_err(|_| unauthorized())
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        "unauthorized",
        "Missing or invalid access token",
    ))
}
