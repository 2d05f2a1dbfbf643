// Password hashing and verification

use bcrypt::{hash, verify};

use crate::errors::{AuthError, AuthResult};

/// Hash a password using bcrypt.
///
/// Runs on the blocking thread pool; bcrypt at production cost takes long
/// enough to stall a reactor thread.
///
/// # Errors
/// Returns `AuthError::HashingError` if bcrypt fails.
pub async fn hash_password(password: &str, cost: u32) -> AuthResult<String> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        hash(password, cost).map_err(|e| AuthError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::HashingError(format!("Task join error: {}", e)))?
}

/// Verify a password against a bcrypt hash.
///
/// Runs on the blocking thread pool. Returns `Ok(false)` for a mismatch;
/// `Err` only when bcrypt itself fails (malformed hash).
pub async fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &hash).map_err(|e| AuthError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::HashingError(format!("Task join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 keeps the test suite fast; production uses the config value.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hash = hash_password("s3cret-password", TEST_COST).await.unwrap();
        assert!(hash.starts_with("$2"));

        assert!(verify_password("s3cret-password", &hash).await.unwrap());
        assert!(!verify_password("wrong-password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let a = hash_password("same-password", TEST_COST).await.unwrap();
        let b = hash_password("same-password", TEST_COST).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("anything", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }
}
