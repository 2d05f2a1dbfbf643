//! User rows with a unique email index.
//!
//! Layout:
//! - `users` partition: user_id → User (JSON)
//! - `idx_users_email` partition: normalized email → user_id
//!
//! Row and index entry are written in one atomic batch. Inserts serialize on
//! an in-process lock so the uniqueness check and the write cannot
//! interleave with a concurrent insert of the same email.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use paylens_commons::ids::UserId;
use paylens_commons::models::{normalize_email, User};
use paylens_store::{EntityStore, StorageBackend, StorageError, UniqueIndex};

use crate::errors::{AuthError, AuthResult};
use crate::stores::CredentialStore;

pub const USERS_PARTITION: &str = "users";
pub const USER_EMAIL_INDEX: &str = "idx_users_email";

/// Storage-backed `CredentialStore`.
#[derive(Clone)]
pub struct UsersProvider {
    backend: Arc<dyn StorageBackend>,
    email_index: UniqueIndex,
    insert_lock: Arc<Mutex<()>>,
}

impl UsersProvider {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let email_index = UniqueIndex::new(backend.clone(), USER_EMAIL_INDEX);
        Self {
            backend,
            email_index,
            insert_lock: Arc::new(Mutex::new(())),
        }
    }

    fn find_by_email_sync(&self, email: &str) -> AuthResult<Option<User>> {
        let normalized = normalize_email(email);
        let user_id = match self.email_index.get(normalized.as_bytes())? {
            Some(id) => id,
            None => return Ok(None),
        };
        let key = UserId::try_new(user_id)
            .map_err(|e| AuthError::StoreUnavailable(format!("corrupt email index entry: {}", e)))?;
        Ok(self.get(&key)?)
    }

    fn create_user_sync(&self, email: &str, password_hash: &str) -> AuthResult<User> {
        let user = User::new(email, password_hash.to_string());

        let _guard = self
            .insert_lock
            .lock()
            .map_err(|_| AuthError::StoreUnavailable("user insert lock poisoned".to_string()))?;

        self.email_index
            .ensure_available(user.email.as_bytes(), user.id.as_str())
            .map_err(|e| match e {
                StorageError::UniqueConstraintViolation(_) => AuthError::DuplicateUser,
                other => other.into(),
            })?;

        self.backend.write_batch(vec![
            self.put_operation(&user.id, &user)?,
            self.email_index
                .put_operation(user.email.as_bytes(), user.id.as_str()),
        ])?;

        log::debug!("Created user {}", user.id);
        Ok(user)
    }
}

impl EntityStore<UserId, User> for UsersProvider {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        USERS_PARTITION
    }
}

#[async_trait]
impl CredentialStore for UsersProvider {
    async fn find_user_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let provider = self.clone();
        let email = email.to_string();
        tokio::task::spawn_blocking(move || provider.find_by_email_sync(&email))
            .await
            .map_err(|e| AuthError::StoreUnavailable(format!("join error: {}", e)))?
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> AuthResult<User> {
        let provider = self.clone();
        let email = email.to_string();
        let password_hash = password_hash.to_string();
        tokio::task::spawn_blocking(move || provider.create_user_sync(&email, &password_hash))
            .await
            .map_err(|e| AuthError::StoreUnavailable(format!("join error: {}", e)))?
    }
}
