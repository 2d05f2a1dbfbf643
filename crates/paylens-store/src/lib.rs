//! # paylens-store
//!
//! Key-value storage layer. This crate isolates all direct RocksDB
//! interaction; crates above it only see the `StorageBackend` abstraction
//! and the typed `EntityStore` layer.
//!
//! ```text
//! paylens-auth / paylens-salaries (domain providers)
//!     ↓
//! paylens-store (typed stores, K/V operations)
//!     ↓
//! RocksDB (or the in-memory backend in tests)
//! ```

pub mod entity_store;
pub mod memory;
pub mod rocksdb_backend;
pub mod storage_trait;
pub mod unique_index;

pub use entity_store::{EntityStore, EntityStoreAsync};
pub use memory::InMemoryBackend;
pub use rocksdb_backend::RocksDbBackend;
pub use storage_trait::{
    Operation, Partition, Result, StorageBackend, StorageBackendAsync, StorageError,
};
pub use unique_index::UniqueIndex;

// Re-export StorageKey so stores don't need a direct paylens-commons import
pub use paylens_commons::StorageKey;
