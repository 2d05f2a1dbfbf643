//! Type-safe entity storage with generic key types.
//!
//! `EntityStore<K, V>` layers typed CRUD on top of `StorageBackend`: keys go
//! through the `StorageKey` contract, values through serde. Using dedicated
//! key types means a submission id cannot be used against the users
//! partition; the mistake fails to compile.
//!
//! ```text
//! EntityStore<K, V>        ← typed entity CRUD (this file)
//!     ↓
//! StorageBackend           ← generic K/V operations (storage_trait.rs)
//!     ↓
//! RocksDB / in-memory      ← actual storage
//! ```

use std::sync::Arc;

use paylens_commons::StorageKey;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};

/// Hard ceiling for unbounded scans, so a runaway partition cannot be pulled
/// into memory whole.
const MAX_SCAN_LIMIT: usize = 100_000;

/// Trait for typed entity storage with automatic serialization.
///
/// Implementors provide `backend()` and `partition()`; everything else has a
/// default. Rows serialize as JSON unless `serialize`/`deserialize` are
/// overridden (e.g. with bincode for hot, internal-only partitions).
pub trait EntityStore<K, V>
where
    K: StorageKey,
    V: Serialize + DeserializeOwned + Send + Sync,
{
    /// Returns a reference to the storage backend.
    fn backend(&self) -> &Arc<dyn StorageBackend>;

    /// Returns the partition name for this entity type.
    fn partition(&self) -> &str;

    /// Serializes an entity to bytes. Default: JSON.
    fn serialize(&self, entity: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Deserializes bytes to an entity. Default: JSON.
    fn deserialize(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Stores an entity under the given key.
    fn put(&self, key: &K, entity: &V) -> Result<()> {
        let partition = Partition::new(self.partition());
        let value = self.serialize(entity)?;
        self.backend().put(&partition, &key.storage_key(), &value)
    }

    /// Retrieves an entity by key. `Ok(None)` when absent.
    fn get(&self, key: &K) -> Result<Option<V>> {
        let partition = Partition::new(self.partition());
        match self.backend().get(&partition, &key.storage_key())? {
            Some(bytes) => Ok(Some(self.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Deletes an entity by key. Idempotent.
    fn delete(&self, key: &K) -> Result<()> {
        let partition = Partition::new(self.partition());
        self.backend().delete(&partition, &key.storage_key())
    }

    /// Builds a batch `Put` operation for this store without writing it.
    ///
    /// Lets callers combine a row write with index writes in one atomic
    /// `write_batch` on the backend.
    fn put_operation(&self, key: &K, entity: &V) -> Result<Operation> {
        Ok(Operation::Put {
            partition: Partition::new(self.partition()),
            key: key.storage_key(),
            value: self.serialize(entity)?,
        })
    }

    /// Scans entities whose keys start with `prefix`, in key order.
    fn scan_prefix_bytes(&self, prefix: &[u8], limit: Option<usize>) -> Result<Vec<(Vec<u8>, V)>> {
        let partition = Partition::new(self.partition());
        let raw = self
            .backend()
            .scan_prefix(&partition, Some(prefix), limit)?;

        let mut results = Vec::with_capacity(raw.len());
        for (key_bytes, value_bytes) in raw {
            results.push((key_bytes, self.deserialize(&value_bytes)?));
        }
        Ok(results)
    }

    /// Scans every entity in the partition, capped at an internal limit.
    fn scan_all(&self) -> Result<Vec<(Vec<u8>, V)>> {
        let partition = Partition::new(self.partition());
        let raw = self
            .backend()
            .scan_prefix(&partition, None, Some(MAX_SCAN_LIMIT))?;
        if raw.len() >= MAX_SCAN_LIMIT {
            log::warn!(
                "scan_all on partition '{}' hit the {} entry cap; results are truncated",
                partition,
                MAX_SCAN_LIMIT
            );
        }

        let mut results = Vec::with_capacity(raw.len());
        for (key_bytes, value_bytes) in raw {
            results.push((key_bytes, self.deserialize(&value_bytes)?));
        }
        Ok(results)
    }
}

/// Async counterpart of `EntityStore`.
///
/// Every method clones the store and runs the sync version inside
/// `tokio::task::spawn_blocking`, mirroring `StorageBackendAsync`. Blanket
/// implemented for any cheaply-clonable `EntityStore`.
#[async_trait::async_trait]
pub trait EntityStoreAsync<K, V>: EntityStore<K, V> + Clone + Send + Sync + 'static
where
    K: StorageKey,
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Async version of `put()`.
    async fn put_async(&self, key: &K, entity: &V) -> Result<()>
    where
        V: Clone,
    {
        let store = self.clone();
        let key = key.clone();
        let entity = entity.clone();
        tokio::task::spawn_blocking(move || store.put(&key, &entity))
            .await
            .map_err(join_error)?
    }

    /// Async version of `get()`.
    async fn get_async(&self, key: &K) -> Result<Option<V>> {
        let store = self.clone();
        let key = key.clone();
        tokio::task::spawn_blocking(move || store.get(&key))
            .await
            .map_err(join_error)?
    }

    /// Async version of `delete()`.
    async fn delete_async(&self, key: &K) -> Result<()> {
        let store = self.clone();
        let key = key.clone();
        tokio::task::spawn_blocking(move || store.delete(&key))
            .await
            .map_err(join_error)?
    }

    /// Async version of `scan_prefix_bytes()`.
    async fn scan_prefix_bytes_async(
        &self,
        prefix: Vec<u8>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, V)>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.scan_prefix_bytes(&prefix, limit))
            .await
            .map_err(join_error)?
    }

    /// Async version of `scan_all()`.
    async fn scan_all_async(&self) -> Result<Vec<(Vec<u8>, V)>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.scan_all())
            .await
            .map_err(join_error)?
    }
}

impl<T, K, V> EntityStoreAsync<K, V> for T
where
    T: EntityStore<K, V> + Clone + Send + Sync + 'static,
    K: StorageKey,
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
}

fn join_error(e: tokio::task::JoinError) -> StorageError {
    StorageError::Other(format!("spawn_blocking join error: {}", e))
}
