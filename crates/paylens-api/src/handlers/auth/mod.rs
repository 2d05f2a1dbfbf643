//! Authentication handlers
//!
//! Signup, login, refresh, and logout over the session service. Responses
//! carry the access token in the JSON body and the refresh token in an
//! HttpOnly cookie.
//!
//! ## Endpoints
//! - POST /auth/signup - Create an account and start a session
//! - POST /auth/login - Authenticate and start a session
//! - POST /auth/refresh - Rotate the refresh token, issue a new pair
//! - POST /auth/logout - Revoke the refresh token and clear the cookie

pub mod models;

mod login;
mod logout;
mod refresh;
mod signup;

pub use login::login_handler;
pub use logout::logout_handler;
pub use refresh::refresh_handler;
pub use signup::signup_handler;

use actix_web::HttpResponse;

use paylens_auth::helpers::cookie::build_refresh_cookie;
use paylens_auth::{AuthConfig, AuthError, SessionTokens};

use crate::models::ErrorResponse;
use models::SessionResponse;

/// Map auth errors to HTTP responses
///
/// Credential and token failures keep their generic domain messages to
/// prevent account enumeration; store and hashing failures are logged and
/// collapse into an opaque 500.
pub(crate) fn map_auth_error_to_response(err: AuthError) -> HttpResponse {
    match err {
        AuthError::DuplicateUser => {
            HttpResponse::BadRequest().json(ErrorResponse::new("duplicate_user", err.to_string()))
        }
        AuthError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", err.to_string()))
        }
        AuthError::InvalidOrExpiredToken => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", err.to_string()))
        }
        AuthError::StoreUnavailable(_) | AuthError::ConfigurationError(_) | AuthError::HashingError(_) => {
            log::error!("Auth operation failed: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Authentication failed"))
        }
    }
}

/// 200 response for a fresh session: `{token, email}` body plus the
/// refresh cookie.
pub(crate) fn session_response(session: &SessionTokens, config: &AuthConfig) -> HttpResponse {
    let cookie = build_refresh_cookie(
        &session.refresh_token,
        config.refresh_token_days,
        config.cookie_secure,
    );
    HttpResponse::Ok()
        .cookie(cookie)
        .json(SessionResponse::from(session))
}
