//! Storage trait abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be stored by this backend
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// String key-value storage shared by every page of one origin.
///
/// Values are opaque strings; callers own their encoding. Writes replace
/// the whole value and the last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    async fn remove(&mut self, key: &str) -> Result<()>;
}
