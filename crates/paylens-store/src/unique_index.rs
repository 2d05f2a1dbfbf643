//! Unique secondary index: index key → primary key.
//!
//! Lives in its own partition next to the indexed rows. Entries store the
//! primary key as UTF-8 bytes. Callers that need the row write and the index
//! write to land together use the `*_operation` builders with
//! `StorageBackend::write_batch`.

use std::sync::Arc;

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};

/// One-to-one mapping from an index key (e.g. normalized email) to the
/// primary key of the owning row.
///
/// The uniqueness check in `ensure_available` is read-then-act; callers that
/// can race on the same index key serialize writers themselves.
#[derive(Clone)]
pub struct UniqueIndex {
    backend: Arc<dyn StorageBackend>,
    partition: Partition,
}

impl UniqueIndex {
    pub fn new(backend: Arc<dyn StorageBackend>, partition_name: &str) -> Self {
        Self {
            backend,
            partition: Partition::new(partition_name),
        }
    }

    /// Looks up the primary key stored for `index_key`.
    pub fn get(&self, index_key: &[u8]) -> Result<Option<String>> {
        match self.backend.get(&self.partition, index_key)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::SerializationError(format!("index entry: {}", e))),
            None => Ok(None),
        }
    }

    /// Errors with `UniqueConstraintViolation` when `index_key` is already
    /// mapped to a different primary key. Re-pointing an entry at its own
    /// row is allowed, so updates that keep the key are fine.
    pub fn ensure_available(&self, index_key: &[u8], primary_key: &str) -> Result<()> {
        if let Some(existing) = self.get(index_key)? {
            if existing != primary_key {
                return Err(StorageError::UniqueConstraintViolation(format!(
                    "index key already taken in {}",
                    self.partition
                )));
            }
        }
        Ok(())
    }

    /// Checks uniqueness and writes the entry.
    pub fn put(&self, index_key: &[u8], primary_key: &str) -> Result<()> {
        self.ensure_available(index_key, primary_key)?;
        self.backend
            .put(&self.partition, index_key, primary_key.as_bytes())
    }

    /// Removes the entry. Idempotent.
    pub fn delete(&self, index_key: &[u8]) -> Result<()> {
        self.backend.delete(&self.partition, index_key)
    }

    /// Batch `Put` for this index, for atomic row+index writes.
    pub fn put_operation(&self, index_key: &[u8], primary_key: &str) -> Operation {
        Operation::Put {
            partition: self.partition.clone(),
            key: index_key.to_vec(),
            value: primary_key.as_bytes().to_vec(),
        }
    }

    /// Batch `Delete` for this index.
    pub fn delete_operation(&self, index_key: &[u8]) -> Operation {
        Operation::Delete {
            partition: self.partition.clone(),
            key: index_key.to_vec(),
        }
    }
}
