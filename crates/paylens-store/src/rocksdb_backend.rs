//! RocksDB implementation of the storage backend.
//!
//! Each `Partition` maps to a RocksDB column family. The full partition set
//! is declared at open time; existing column families found on disk are kept
//! even when no longer declared, so downgrades never fail to open.

use std::path::Path;

use rocksdb::{ColumnFamily, Direction, IteratorMode, Options, WriteBatch, DB};

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};

/// RocksDB-backed `StorageBackend` with one column family per partition.
pub struct RocksDbBackend {
    db: DB,
}

impl RocksDbBackend {
    /// Opens (or creates) the database at `path` with the given partitions.
    ///
    /// Column families already present on disk are reopened alongside the
    /// requested set, so adding partitions across versions is safe in both
    /// directions.
    pub fn open(path: impl AsRef<Path>, partitions: &[&str]) -> Result<Self> {
        let path = path.as_ref();

        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);

        let mut cf_names = match DB::list_cf(&db_opts, path) {
            Ok(cfs) if !cfs.is_empty() => cfs,
            _ => vec!["default".to_string()],
        };
        for name in partitions {
            if !cf_names.iter().any(|existing| existing == name) {
                cf_names.push((*name).to_string());
            }
        }

        let db = DB::open_cf(&db_opts, path, &cf_names)
            .map_err(|e| StorageError::IoError(format!("failed to open RocksDB: {}", e)))?;

        log::info!(
            "Opened RocksDB at {} with {} column families",
            path.display(),
            cf_names.len()
        );

        Ok(Self { db })
    }

    fn cf(&self, partition: &Partition) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))
    }
}

impl StorageBackend for RocksDbBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf = self.cf(partition)?;
        self.db
            .get_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let cf = self.cf(partition)?;
        self.db
            .put_cf(cf, key, value)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let cf = self.cf(partition)?;
        self.db
            .delete_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn write_batch(&self, operations: Vec<Operation>) -> Result<()> {
        let mut batch = WriteBatch::default();
        for op in &operations {
            match op {
                Operation::Put {
                    partition,
                    key,
                    value,
                } => {
                    let cf = self.cf(partition)?;
                    batch.put_cf(cf, key, value);
                }
                Operation::Delete { partition, key } => {
                    let cf = self.cf(partition)?;
                    batch.delete_cf(cf, key);
                }
            }
        }
        self.db
            .write(batch)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn scan_prefix(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let cf = self.cf(partition)?;

        let mode = match prefix {
            Some(prefix) => IteratorMode::From(prefix, Direction::Forward),
            None => IteratorMode::Start,
        };

        let max = limit.unwrap_or(usize::MAX);
        let mut results = Vec::new();
        for item in self.db.iterator_cf(cf, mode) {
            let (key, value) = item.map_err(|e| StorageError::IoError(e.to_string()))?;
            if let Some(prefix) = prefix {
                if !key.starts_with(prefix) {
                    break;
                }
            }
            results.push((key.to_vec(), value.to_vec()));
            if results.len() >= max {
                break;
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir, partitions: &[&str]) -> RocksDbBackend {
        RocksDbBackend::open(dir.path(), partitions).unwrap()
    }

    #[test]
    fn test_get_put_delete() {
        let dir = TempDir::new().unwrap();
        let backend = open(&dir, &["users"]);
        let partition = Partition::new("users");

        assert_eq!(backend.get(&partition, b"k").unwrap(), None);
        backend.put(&partition, b"k", b"v").unwrap();
        assert_eq!(backend.get(&partition, b"k").unwrap(), Some(b"v".to_vec()));
        backend.delete(&partition, b"k").unwrap();
        assert_eq!(backend.get(&partition, b"k").unwrap(), None);
    }

    #[test]
    fn test_unknown_partition_errors() {
        let dir = TempDir::new().unwrap();
        let backend = open(&dir, &["users"]);
        let missing = Partition::new("missing");

        let err = backend.get(&missing, b"k").unwrap_err();
        assert!(matches!(err, StorageError::PartitionNotFound(_)));
    }

    #[test]
    fn test_write_batch_is_atomic_across_partitions() {
        let dir = TempDir::new().unwrap();
        let backend = open(&dir, &["rows", "index"]);
        let rows = Partition::new("rows");
        let index = Partition::new("index");

        backend
            .write_batch(vec![
                Operation::Put {
                    partition: rows.clone(),
                    key: b"r1".to_vec(),
                    value: b"row".to_vec(),
                },
                Operation::Put {
                    partition: index.clone(),
                    key: b"email".to_vec(),
                    value: b"r1".to_vec(),
                },
            ])
            .unwrap();

        assert_eq!(backend.get(&rows, b"r1").unwrap(), Some(b"row".to_vec()));
        assert_eq!(
            backend.get(&index, b"email").unwrap(),
            Some(b"r1".to_vec())
        );
    }

    #[test]
    fn test_scan_prefix_stops_at_prefix_end() {
        let dir = TempDir::new().unwrap();
        let backend = open(&dir, &["votes"]);
        let partition = Partition::new("votes");
        backend.put(&partition, b"s1:alice", b"1").unwrap();
        backend.put(&partition, b"s1:bob", b"2").unwrap();
        backend.put(&partition, b"s2:carol", b"3").unwrap();

        let hits = backend
            .scan_prefix(&partition, Some(b"s1:"), None)
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, b"s1:alice".to_vec());

        let limited = backend
            .scan_prefix(&partition, Some(b"s1:"), Some(1))
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_reopen_preserves_data_and_extra_column_families() {
        let dir = TempDir::new().unwrap();
        {
            let backend = open(&dir, &["users", "legacy"]);
            backend
                .put(&Partition::new("legacy"), b"k", b"old")
                .unwrap();
        }

        // Reopen without declaring "legacy"; the existing family must survive.
        let backend = open(&dir, &["users"]);
        assert_eq!(
            backend.get(&Partition::new("legacy"), b"k").unwrap(),
            Some(b"old".to_vec())
        );
    }
}
