//! Storage backend abstraction for pluggable storage implementations.
//!
//! The `StorageBackend` trait defines the operations every backend supports:
//! - get/put/delete for key-value access
//! - write_batch for atomic multi-operation writes
//! - scan_prefix for ordered range reads
//!
//! ## Partition Model
//!
//! Data is organized into named `Partition`s. Backends map partitions to
//! their native concept:
//! - **RocksDB**: Partition = Column Family
//! - **In-Memory**: Partition = BTreeMap namespace
//!
//! ## Async Access
//!
//! Backend calls block. Async code goes through `StorageBackendAsync`, a
//! blanket extension over `Arc<dyn StorageBackend>` that offloads each call
//! to `tokio::task::spawn_blocking` so the runtime never stalls on storage.

use std::fmt;
use std::sync::Arc;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Partition (column family, namespace) not found
    PartitionNotFound(String),

    /// Generic I/O error from underlying storage
    IoError(String),

    /// Serialization/deserialization error
    SerializationError(String),

    /// Unique constraint violation (for indexes)
    UniqueConstraintViolation(String),

    /// Lock poisoning error (internal concurrency issue)
    LockPoisoned(String),

    /// Other errors
    Other(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PartitionNotFound(p) => write!(f, "Partition not found: {}", p),
            StorageError::IoError(msg) => write!(f, "I/O error: {}", msg),
            StorageError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::UniqueConstraintViolation(msg) => {
                write!(f, "Unique constraint violation: {}", msg)
            }
            StorageError::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            StorageError::Other(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// A named partition of data within a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    name: String,
}

impl Partition {
    /// Creates a new partition handle with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the partition name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<String> for Partition {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Partition {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single operation within an atomic batch.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Insert or update a key-value pair
    Put {
        partition: Partition,
        key: Vec<u8>,
        value: Vec<u8>,
    },

    /// Delete a key
    Delete { partition: Partition, key: Vec<u8> },
}

/// Trait for pluggable storage backend implementations.
///
/// Implementations must be thread-safe (Send + Sync) to allow concurrent
/// access. Backends should:
/// - Return `PartitionNotFound` if a partition doesn't exist
/// - Return `IoError` for underlying storage failures
/// - Apply `write_batch` atomically (all-or-nothing)
pub trait StorageBackend: Send + Sync {
    /// Retrieves a value by key from the specified partition.
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Stores a key-value pair in the specified partition.
    ///
    /// If the key already exists, its value is updated.
    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()>;

    /// Deletes a key from the specified partition.
    ///
    /// Returns `Ok(())` even if the key doesn't exist (idempotent).
    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()>;

    /// Executes multiple operations atomically.
    ///
    /// Either all operations succeed or none are applied.
    fn write_batch(&self, operations: Vec<Operation>) -> Result<()>;

    /// Scans a partition in key order.
    ///
    /// - `prefix`: if Some, only keys starting with this prefix are returned
    /// - `limit`: if Some, at most this many entries are returned
    ///
    /// Results are collected; callers bound large scans with `limit`.
    fn scan_prefix(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;
}

/// Extension trait providing async versions of `StorageBackend` methods.
///
/// Each method offloads the synchronous call to `tokio::task::spawn_blocking`.
///
/// ```rust,ignore
/// use paylens_store::{StorageBackend, StorageBackendAsync, Partition};
/// use std::sync::Arc;
///
/// async fn store_data(backend: Arc<dyn StorageBackend>, partition: &Partition) {
///     backend.put_async(partition, b"key", b"value").await.unwrap();
///     let value = backend.get_async(partition, b"key").await.unwrap();
/// }
/// ```
#[async_trait::async_trait]
pub trait StorageBackendAsync: Send + Sync {
    /// Async version of `get()`.
    async fn get_async(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Async version of `put()`.
    async fn put_async(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()>;

    /// Async version of `delete()`.
    async fn delete_async(&self, partition: &Partition, key: &[u8]) -> Result<()>;

    /// Async version of `write_batch()`.
    async fn write_batch_async(&self, operations: Vec<Operation>) -> Result<()>;

    /// Async version of `scan_prefix()`.
    async fn scan_prefix_async(
        &self,
        partition: &Partition,
        prefix: Option<Vec<u8>>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;
}

fn join_error(e: tokio::task::JoinError) -> StorageError {
    StorageError::Other(format!("spawn_blocking join error: {}", e))
}

// Blanket implementation for Arc<dyn StorageBackend>
#[async_trait::async_trait]
impl StorageBackendAsync for Arc<dyn StorageBackend> {
    async fn get_async(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let backend = self.clone();
        let partition = partition.clone();
        let key = key.to_vec();
        tokio::task::spawn_blocking(move || backend.get(&partition, &key))
            .await
            .map_err(join_error)?
    }

    async fn put_async(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let backend = self.clone();
        let partition = partition.clone();
        let key = key.to_vec();
        let value = value.to_vec();
        tokio::task::spawn_blocking(move || backend.put(&partition, &key, &value))
            .await
            .map_err(join_error)?
    }

    async fn delete_async(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let backend = self.clone();
        let partition = partition.clone();
        let key = key.to_vec();
        tokio::task::spawn_blocking(move || backend.delete(&partition, &key))
            .await
            .map_err(join_error)?
    }

    async fn write_batch_async(&self, operations: Vec<Operation>) -> Result<()> {
        let backend = self.clone();
        tokio::task::spawn_blocking(move || backend.write_batch(operations))
            .await
            .map_err(join_error)?
    }

    async fn scan_prefix_async(
        &self,
        partition: &Partition,
        prefix: Option<Vec<u8>>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let backend = self.clone();
        let partition = partition.clone();
        tokio::task::spawn_blocking(move || {
            backend.scan_prefix(&partition, prefix.as_deref(), limit)
        })
        .await
        .map_err(join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_display_and_eq() {
        let p = Partition::new("users");
        assert_eq!(p.name(), "users");
        assert_eq!(p.to_string(), "users");
        assert_eq!(p, Partition::from("users"));
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::PartitionNotFound("missing".to_string());
        assert_eq!(err.to_string(), "Partition not found: missing");

        let err = StorageError::UniqueConstraintViolation("email taken".to_string());
        assert!(err.to_string().contains("email taken"));
    }
}
