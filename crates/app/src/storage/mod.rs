//! Durable Key-Value Storage

pub mod errors;
pub mod file;
pub mod memory;

use async_trait::async_trait;

pub use errors::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Opaque byte store addressed by string keys.
///
/// Writes are full overwrites; the last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Make every completed `set` durable. Called once at shutdown.
    async fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
