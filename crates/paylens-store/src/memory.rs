//! In-memory storage backend.
//!
//! Keeps every partition in a `BTreeMap` so scans see the same key ordering
//! RocksDB gives. Used by tests and available for ephemeral deployments;
//! nothing survives a restart.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};

type PartitionData = BTreeMap<Vec<u8>, Vec<u8>>;

/// Thread-safe in-memory `StorageBackend`.
///
/// Partitions spring into existence on first write; reading an unknown
/// partition behaves like reading an empty one. Batches apply under a single
/// write lock, so readers never observe a half-applied batch.
#[derive(Default)]
pub struct InMemoryBackend {
    partitions: RwLock<HashMap<String, PartitionData>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::LockPoisoned("in-memory partition map lock poisoned".to_string())
}

impl StorageBackend for InMemoryBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let partitions = self.partitions.read().map_err(poisoned)?;
        Ok(partitions
            .get(partition.name())
            .and_then(|data| data.get(key).cloned()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let mut partitions = self.partitions.write().map_err(poisoned)?;
        partitions
            .entry(partition.name().to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let mut partitions = self.partitions.write().map_err(poisoned)?;
        if let Some(data) = partitions.get_mut(partition.name()) {
            data.remove(key);
        }
        Ok(())
    }

    fn write_batch(&self, operations: Vec<Operation>) -> Result<()> {
        let mut partitions = self.partitions.write().map_err(poisoned)?;
        for op in operations {
            match op {
                Operation::Put {
                    partition,
                    key,
                    value,
                } => {
                    partitions
                        .entry(partition.name().to_string())
                        .or_default()
                        .insert(key, value);
                }
                Operation::Delete { partition, key } => {
                    if let Some(data) = partitions.get_mut(partition.name()) {
                        data.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }

    fn scan_prefix(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let partitions = self.partitions.read().map_err(poisoned)?;
        let data = match partitions.get(partition.name()) {
            Some(data) => data,
            None => return Ok(Vec::new()),
        };

        let max = limit.unwrap_or(usize::MAX);
        let results = match prefix {
            Some(prefix) => data
                .range(prefix.to_vec()..)
                .take_while(|(key, _)| key.starts_with(prefix))
                .take(max)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => data
                .iter()
                .take(max)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        Ok(results)
    }
}
