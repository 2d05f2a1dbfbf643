//! Session response model

use serde::Serialize;

use paylens_auth::SessionTokens;

/// Success body for signup, login, and refresh. The refresh token itself
/// travels only in the HttpOnly cookie, never in the body.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Signed JWT access token for the Authorization header
    pub token: String,
    /// Normalized account email
    pub email: String,
}

impl From<&SessionTokens> for SessionResponse {
    fn from(session: &SessionTokens) -> Self {
        Self {
            token: session.access_token.clone(),
            email: session.email.clone(),
        }
    }
}
