//! Persisted refresh-token model.

use serde::{Deserialize, Serialize};

use crate::ids::{TokenId, UserId};

/// One issued refresh token.
///
/// `token` is the opaque value handed to the client; `id` is the row key.
/// A token is *active* when it has not been revoked and `now < expires_at`.
/// Rotation revokes the presented row and issues a replacement, so each
/// value is usable exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub id: TokenId,
    /// Opaque client-held value (64 random bytes, base64-encoded).
    pub token: String,
    pub user_id: UserId,
    pub user_email: String,
    /// Unix milliseconds.
    pub issued_at: i64,
    /// Unix milliseconds. At exactly this instant the token is expired.
    pub expires_at: i64,
    /// Set when the token is rotated away or revoked by logout.
    pub revoked_at: Option<i64>,
}

impl RefreshToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Whether this token can still be redeemed at `now`.
    pub fn is_active(&self, now: i64) -> bool {
        !self.is_revoked() && !self.is_expired(now)
    }

    /// Marks the token revoked. Keeps the original timestamp if the token
    /// was already revoked, so repeated logouts stay idempotent.
    pub fn revoke(&mut self, now: i64) {
        self.revoked_at.get_or_insert(now);
    }
}
