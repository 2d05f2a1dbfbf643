//! Storage key trait for type-safe key serialization.
//!
//! Every key stored through the entity layer goes through an explicit
//! `StorageKey` contract instead of ad-hoc `AsRef<[u8]>` conversions. Keys in
//! this system are UTF-8 strings (nanoid identifiers, normalized emails,
//! composite "a:b" forms), so plain byte encoding already preserves RocksDB's
//! lexicographic ordering for every scan we perform.

/// Trait for keys that can be serialized for storage in an entity store.
///
/// Implementations must round-trip: `from_storage_key(storage_key(k)) == k`.
pub trait StorageKey: Clone + Send + Sync + 'static {
    /// Serialize this key to bytes for storage.
    fn storage_key(&self) -> Vec<u8>;

    /// Deserialize this key from bytes.
    fn from_storage_key(bytes: &[u8]) -> Result<Self, String>
    where
        Self: Sized;
}

impl StorageKey for String {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())
    }
}

impl StorageKey for Vec<u8> {
    fn storage_key(&self) -> Vec<u8> {
        self.clone()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        Ok(bytes.to_vec())
    }
}
