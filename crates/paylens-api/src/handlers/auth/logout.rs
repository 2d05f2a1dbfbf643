//! Logout handler
//!
//! POST /auth/logout - Revokes the refresh token and clears the cookie

use actix_web::{web, HttpRequest, HttpResponse};

use paylens_auth::helpers::cookie::{clear_refresh_cookie, REFRESH_COOKIE_NAME};
use paylens_auth::{AuthConfig, SessionService};

/// POST /auth/logout
///
/// Always 200: revocation of an unknown or already-revoked token is a
/// silent no-op, and the expired cookie is sent back either way.
pub async fn logout_handler(
    req: HttpRequest,
    service: web::Data<SessionService>,
    config: web::Data<AuthConfig>,
) -> HttpResponse {
    if let Some(cookie) = req.cookie(REFRESH_COOKIE_NAME) {
        service.logout(cookie.value()).await;
    }

    HttpResponse::Ok()
        .cookie(clear_refresh_cookie(config.cookie_secure))
        .json(serde_json::json!({
            "message": "Logged out successfully"
        }))
}
