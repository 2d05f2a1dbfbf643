//! Store contracts for the identity domain.
//!
//! The session service talks to these traits only, so tests can swap in
//! in-memory fakes and the production providers stay behind a seam.

use async_trait::async_trait;

use paylens_commons::ids::TokenId;
use paylens_commons::models::{RefreshToken, User};

use crate::errors::AuthResult;

/// Access to persisted user credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a user by email. The implementation normalizes the email
    /// before matching, so callers may pass raw input.
    async fn find_user_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Creates a user with the given (already hashed) password.
    ///
    /// Fails `DuplicateUser` when the normalized email is taken; on failure
    /// no row is written.
    async fn create_user(&self, email: &str, password_hash: &str) -> AuthResult<User>;
}

/// Access to persisted refresh tokens.
///
/// Rows are never deleted; revocation and rotation only ever set
/// `revoked_at`.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Looks up a token row by its opaque client-held value.
    async fn find_by_value(&self, value: &str) -> AuthResult<Option<RefreshToken>>;

    /// Persists a new active token row for the user with the given minted
    /// value and expiry. The store assigns the row id and issue time.
    async fn create(&self, user: &User, value: String, expires_at: i64) -> AuthResult<RefreshToken>;

    /// Sets `revoked_at` on the row if it exists and is not already revoked.
    /// Unknown ids are a silent no-op.
    async fn revoke(&self, token_id: &TokenId, at: i64) -> AuthResult<()>;

    /// Atomically retires the presented token and persists its replacement.
    ///
    /// Compare-and-set semantics: fails `InvalidOrExpiredToken` unless the
    /// presented row is still active at commit time, so two concurrent
    /// rotations of the same token produce exactly one winner. The revoke
    /// and the insert land in one atomic write; partial application is never
    /// observable.
    async fn rotate(
        &self,
        presented_id: &TokenId,
        at: i64,
        replacement_value: String,
        replacement_expires_at: i64,
    ) -> AuthResult<RefreshToken>;
}
