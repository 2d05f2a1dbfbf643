//! Refresh-token rows with a unique token-value index.
//!
//! Layout:
//! - `refresh_tokens` partition: token_id → RefreshToken (bincode)
//! - `idx_refresh_tokens_value` partition: opaque value → token_id
//!
//! Rows are hot (read on every refresh) and never leave the process, so
//! they override the entity store's JSON default with bincode. Rows are
//! never deleted: rotation and revocation only set `revoked_at`, and index
//! entries stay so a replayed value resolves to its revoked row.
//!
//! Rotation runs under an in-process lock: the active check and the
//! revoke-old + insert-new batch commit as one unit, which is what makes
//! concurrent rotations of the same token produce exactly one winner.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use paylens_commons::ids::TokenId;
use paylens_commons::models::{RefreshToken, User};
use paylens_commons::time::now_millis;
use paylens_store::{EntityStore, StorageBackend, StorageError, UniqueIndex};

use crate::errors::{AuthError, AuthResult};
use crate::stores::RefreshTokenStore;

pub const REFRESH_TOKENS_PARTITION: &str = "refresh_tokens";
pub const REFRESH_TOKEN_VALUE_INDEX: &str = "idx_refresh_tokens_value";

/// Storage-backed `RefreshTokenStore`.
#[derive(Clone)]
pub struct RefreshTokensProvider {
    backend: Arc<dyn StorageBackend>,
    value_index: UniqueIndex,
    rotation_lock: Arc<Mutex<()>>,
}

impl RefreshTokensProvider {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let value_index = UniqueIndex::new(backend.clone(), REFRESH_TOKEN_VALUE_INDEX);
        Self {
            backend,
            value_index,
            rotation_lock: Arc::new(Mutex::new(())),
        }
    }

    fn lock(&self) -> AuthResult<std::sync::MutexGuard<'_, ()>> {
        self.rotation_lock
            .lock()
            .map_err(|_| AuthError::StoreUnavailable("token rotation lock poisoned".to_string()))
    }

    fn find_by_value_sync(&self, value: &str) -> AuthResult<Option<RefreshToken>> {
        let token_id = match self.value_index.get(value.as_bytes())? {
            Some(id) => TokenId::new(id),
            None => return Ok(None),
        };
        Ok(self.get(&token_id)?)
    }

    fn create_sync(&self, user: &User, value: String, expires_at: i64) -> AuthResult<RefreshToken> {
        let token = RefreshToken {
            id: TokenId::generate(),
            token: value,
            user_id: user.id.clone(),
            user_email: user.email.clone(),
            issued_at: now_millis(),
            expires_at,
            revoked_at: None,
        };

        // A 512-bit value collision means the RNG is broken; refuse to
        // overwrite the existing row.
        self.value_index
            .ensure_available(token.token.as_bytes(), token.id.as_str())
            .map_err(|e| match e {
                StorageError::UniqueConstraintViolation(_) => {
                    AuthError::StoreUnavailable("refresh token value collision".to_string())
                }
                other => other.into(),
            })?;

        self.backend.write_batch(vec![
            self.put_operation(&token.id, &token)?,
            self.value_index
                .put_operation(token.token.as_bytes(), token.id.as_str()),
        ])?;
        Ok(token)
    }

    fn revoke_sync(&self, token_id: &TokenId, at: i64) -> AuthResult<()> {
        let _guard = self.lock()?;
        if let Some(mut token) = self.get(token_id)? {
            if !token.is_revoked() {
                token.revoke(at);
                self.put(token_id, &token)?;
                log::debug!("Revoked refresh token {}", token_id);
            }
        }
        Ok(())
    }

    fn rotate_sync(
        &self,
        presented_id: &TokenId,
        at: i64,
        replacement_value: String,
        replacement_expires_at: i64,
    ) -> AuthResult<RefreshToken> {
        let _guard = self.lock()?;

        // Compare-and-set: re-read under the lock; a concurrent rotation
        // that already committed leaves the row revoked and we lose cleanly.
        let mut presented = self
            .get(presented_id)?
            .ok_or(AuthError::InvalidOrExpiredToken)?;
        if !presented.is_active(at) {
            return Err(AuthError::InvalidOrExpiredToken);
        }
        presented.revoke(at);

        let replacement = RefreshToken {
            id: TokenId::generate(),
            token: replacement_value,
            user_id: presented.user_id.clone(),
            user_email: presented.user_email.clone(),
            issued_at: at,
            expires_at: replacement_expires_at,
            revoked_at: None,
        };

        self.backend.write_batch(vec![
            self.put_operation(presented_id, &presented)?,
            self.put_operation(&replacement.id, &replacement)?,
            self.value_index
                .put_operation(replacement.token.as_bytes(), replacement.id.as_str()),
        ])?;

        Ok(replacement)
    }
}

impl EntityStore<TokenId, RefreshToken> for RefreshTokensProvider {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        REFRESH_TOKENS_PARTITION
    }

    fn serialize(&self, entity: &RefreshToken) -> paylens_store::Result<Vec<u8>> {
        bincode::serialize(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> paylens_store::Result<RefreshToken> {
        bincode::deserialize(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokensProvider {
    async fn find_by_value(&self, value: &str) -> AuthResult<Option<RefreshToken>> {
        let provider = self.clone();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || provider.find_by_value_sync(&value))
            .await
            .map_err(|e| AuthError::StoreUnavailable(format!("join error: {}", e)))?
    }

    async fn create(&self, user: &User, value: String, expires_at: i64) -> AuthResult<RefreshToken> {
        let provider = self.clone();
        let user = user.clone();
        tokio::task::spawn_blocking(move || provider.create_sync(&user, value, expires_at))
            .await
            .map_err(|e| AuthError::StoreUnavailable(format!("join error: {}", e)))?
    }

    async fn revoke(&self, token_id: &TokenId, at: i64) -> AuthResult<()> {
        let provider = self.clone();
        let token_id = token_id.clone();
        tokio::task::spawn_blocking(move || provider.revoke_sync(&token_id, at))
            .await
            .map_err(|e| AuthError::StoreUnavailable(format!("join error: {}", e)))?
    }

    async fn rotate(
        &self,
        presented_id: &TokenId,
        at: i64,
        replacement_value: String,
        replacement_expires_at: i64,
    ) -> AuthResult<RefreshToken> {
        let provider = self.clone();
        let presented_id = presented_id.clone();
        tokio::task::spawn_blocking(move || {
            provider.rotate_sync(&presented_id, at, replacement_value, replacement_expires_at)
        })
        .await
        .map_err(|e| AuthError::StoreUnavailable(format!("join error: {}", e)))?
    }
}
