//! Session lifecycle: register, login, refresh rotation, logout.
//!
//! Each refresh token moves `ACTIVE → ROTATED / REVOKED` and never returns.
//! The service holds no mutable state of its own; it composes the stores,
//! the token issuer, and the clock, so it is safe to call concurrently.

use std::sync::Arc;

use tracing::Instrument;

use paylens_commons::models::User;
use paylens_commons::time::{millis_after_days, now_millis};

use crate::config::AuthConfig;
use crate::errors::{AuthError, AuthResult};
use crate::password;
use crate::stores::{CredentialStore, RefreshTokenStore};
use crate::token_issuer::TokenIssuer;

/// What a successful register/login/refresh hands back: a signed access
/// token for the Authorization header, an opaque refresh value for the
/// cookie, and the account email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub email: String,
}

pub struct SessionService {
    credentials: Arc<dyn CredentialStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    issuer: Arc<TokenIssuer>,
    config: AuthConfig,
}

impl SessionService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        issuer: Arc<TokenIssuer>,
        config: AuthConfig,
    ) -> Self {
        Self {
            credentials,
            refresh_tokens,
            issuer,
            config,
        }
    }

    /// Creates the account and starts its first session.
    ///
    /// Fails `DuplicateUser` when the normalized email is already
    /// registered; the uniqueness check belongs to the credential store.
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<SessionTokens> {
        let span = tracing::info_span!("session.register", email = email);
        async move {
            let hash = password::hash_password(password, self.config.bcrypt_cost).await?;
            let user = self.credentials.create_user(email, &hash).await?;
            tracing::info!(user_id = %user.id, "New user registered");
            self.issue_session(&user).await
        }
        .instrument(span)
        .await
    }

    /// Verifies credentials and starts a new session.
    ///
    /// Unknown email and wrong password both fail `InvalidCredentials`, so
    /// responses never reveal whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<SessionTokens> {
        let span = tracing::info_span!("session.login", email = email);
        async move {
            let user = self
                .credentials
                .find_user_by_email(email)
                .await?
                .ok_or(AuthError::InvalidCredentials)?;

            let verified = password::verify_password(password, &user.password_hash)
                .await
                .unwrap_or(false);
            if !verified {
                tracing::warn!("Login failed");
                return Err(AuthError::InvalidCredentials);
            }

            tracing::debug!(user_id = %user.id, "Login succeeded");
            self.issue_session(&user).await
        }
        .instrument(span)
        .await
    }

    /// Redeems a refresh token: rotates it and issues a fresh pair.
    ///
    /// Single-use: the presented value is retired atomically, so replaying
    /// it (or racing two refreshes on it) leaves exactly one winner and
    /// everyone else with `InvalidOrExpiredToken`.
    pub async fn refresh(&self, presented: &str) -> AuthResult<SessionTokens> {
        let span = tracing::info_span!("session.refresh", user = tracing::field::Empty);
        async move {
            let now = now_millis();
            let presented_row = self
                .refresh_tokens
                .find_by_value(presented)
                .await?
                .ok_or(AuthError::InvalidOrExpiredToken)?;
            if !presented_row.is_active(now) {
                tracing::warn!("Refresh with inactive token rejected");
                return Err(AuthError::InvalidOrExpiredToken);
            }
            tracing::Span::current().record("user", presented_row.user_email.as_str());

            // The account must still resolve; a vanished user invalidates
            // its outstanding tokens.
            let user = self
                .credentials
                .find_user_by_email(&presented_row.user_email)
                .await?
                .ok_or(AuthError::InvalidOrExpiredToken)?;

            // The store re-checks activity under its lock, so losing a race
            // here surfaces as InvalidOrExpiredToken from rotate.
            let replacement = self
                .refresh_tokens
                .rotate(
                    &presented_row.id,
                    now,
                    TokenIssuer::generate_refresh_value(),
                    millis_after_days(self.config.refresh_token_days),
                )
                .await?;

            let access_token = self.issuer.issue_access_token(&user)?;
            Ok(SessionTokens {
                access_token,
                refresh_token: replacement.token,
                email: user.email,
            })
        }
        .instrument(span)
        .await
    }

    /// Revokes the presented token if it is known and still active.
    ///
    /// Always succeeds from the caller's perspective: unknown values,
    /// already-revoked tokens, and even store failures are absorbed and
    /// logged. Logout must not fail.
    pub async fn logout(&self, presented: &str) {
        let span = tracing::info_span!("session.logout");
        async move {
            match self.refresh_tokens.find_by_value(presented).await {
                Ok(Some(token)) => {
                    if let Err(e) = self.refresh_tokens.revoke(&token.id, now_millis()).await {
                        tracing::warn!(error = %e, "Failed to revoke refresh token on logout");
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Logout token lookup failed; treating as success");
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn issue_session(&self, user: &User) -> AuthResult<SessionTokens> {
        let refresh_row = self
            .refresh_tokens
            .create(
                user,
                TokenIssuer::generate_refresh_value(),
                millis_after_days(self.config.refresh_token_days),
            )
            .await?;
        let access_token = self.issuer.issue_access_token(user)?;
        Ok(SessionTokens {
            access_token,
            refresh_token: refresh_row.token,
            email: user.email.clone(),
        })
    }
}
