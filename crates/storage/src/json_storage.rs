//! JSON file storage implementation.
//!
//! Stores each key as `<key>.json` inside a root directory. The file body is
//! the raw value, so a JSON-encoded value stays readable on disk. There is no
//! locking: concurrent writers overwrite each other and the last one wins.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use super::{KeyValueStore, StorageError, Result};

/// File-based key-value backend.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Directory holding the value files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.contains('/')
        || key.contains('\\')
        || key.contains("..")
        || key.contains('\0');
    if bad {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        fs::write(&path, value.as_bytes()).await?;
        debug!("Stored {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;
        fs::remove_file(&path).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        debug!("Removed {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        assert_eq!(store.get("unlockedPages").await.unwrap(), None);

        store.set("unlockedPages", r#"["index","timeline"]"#).await.unwrap();
        let on_disk = std::fs::read_to_string(dir.path().join("unlockedPages.json")).unwrap();
        assert_eq!(on_disk, r#"["index","timeline"]"#);

        // A second handle on the same directory sees the write.
        let other = JsonFileStore::new(dir.path()).await.unwrap();
        assert_eq!(
            other.get("unlockedPages").await.unwrap().as_deref(),
            Some(r#"["index","timeline"]"#)
        );
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested")).await.unwrap();

        store.remove("unlockedPages").await.unwrap();
        store.set("unlockedPages", "[]").await.unwrap();
        store.remove("unlockedPages").await.unwrap();
        assert_eq!(store.get("unlockedPages").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        for key in ["", "../escape", "a/b", "a\\b"] {
            assert!(matches!(
                store.set(key, "[]").await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}
