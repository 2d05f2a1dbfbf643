//! Registered account model.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::time::now_millis;

/// Normalizes an email address for storage and comparison.
///
/// Lookups, uniqueness checks, and stored rows all use this form, so
/// `" Alice@Example.COM "` and `"alice@example.com"` are the same account.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A registered account.
///
/// The `email` field is always stored normalized; construct through
/// [`User::new`] to keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Bcrypt hash of the password. Plaintext is never persisted.
    pub password_hash: String,
    /// Unix milliseconds.
    pub created_at: i64,
}

impl User {
    /// Creates a new user with a generated id and the current timestamp.
    ///
    /// The email is normalized here so every stored row satisfies the
    /// lowercase invariant regardless of caller input.
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            id: UserId::generate(),
            email: normalize_email(email),
            password_hash,
            created_at: now_millis(),
        }
    }
}
