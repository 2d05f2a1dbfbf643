// Refresh-token cookie construction
//
// The refresh token travels only in an HttpOnly cookie; it is never part of
// a JSON response body. SameSite=Lax matches the browser client, which
// calls the API from a different origin via fetch with credentials.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

/// Cookie name for the refresh token.
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Builds the refresh cookie set on signup, login, and refresh.
///
/// `secure` comes from configuration; enable it behind HTTPS.
pub fn build_refresh_cookie<'a>(value: &str, ttl_days: i64, secure: bool) -> Cookie<'a> {
    Cookie::build(REFRESH_COOKIE_NAME, value.to_string())
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(ttl_days))
        .finish()
}

/// Builds an expired cookie that removes the refresh token from the client.
pub fn clear_refresh_cookie<'a>(secure: bool) -> Cookie<'a> {
    Cookie::build(REFRESH_COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .finish()
}
