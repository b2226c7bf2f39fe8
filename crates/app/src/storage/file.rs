//! JSON file-backed key-value store.

use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tokio::{fs, sync::RwLock};
use tracing::{debug, warn};

use crate::storage::{KeyValueStore, StorageError};

/// Persists every entry into a single JSON object of `key -> base64(value)`.
///
/// The whole file is rewritten on each `set`, through a sibling temporary file that is renamed
/// over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the file (and parent directories) if missing.
    ///
    /// An unreadable JSON document is replaced with an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let entries = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|error| {
                warn!(path = %path.display(), %error, "discarding unreadable store file");

                BTreeMap::new()
            }),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                let empty: BTreeMap<String, String> = BTreeMap::new();

                fs::write(&path, serde_json::to_vec(&empty)?).await?;
                debug!(path = %path.display(), "created store file");

                empty
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.read().await;

        entries
            .get(key)
            .map(|encoded| {
                BASE64
                    .decode(encoded)
                    .map_err(|source| StorageError::Encoding(key.to_string(), source))
            })
            .transpose()
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;

        let mut next = entries.clone();
        next.insert(key.to_string(), BASE64.encode(value));

        let data = serde_json::to_vec(&next)?;
        let staging = self.path.with_extension("tmp");

        fs::write(&staging, data).await?;
        fs::rename(&staging, &self.path).await?;

        *entries = next;

        Ok(())
    }

    async fn flush(&self) -> Result<(), StorageError> {
        let _entries = self.entries.read().await;

        fs::File::open(&self.path).await?.sync_all().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn open_creates_missing_file() -> TestResult {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("store.json");

        let store = JsonFileStore::open(&path).await?;

        assert!(path.exists());
        assert_eq!(store.get("cart").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn values_survive_reopen() -> TestResult {
        let dir = tempdir()?;
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(&path).await?;

        store.set("cart", br#"[{"id":1}]"#.to_vec()).await?;
        store.set("cart", b"[]".to_vec()).await?;
        store.set("other", vec![0, 159, 146, 150]).await?;
        store.flush().await?;

        let reopened = JsonFileStore::open(&path).await?;

        assert_eq!(reopened.get("cart").await?, Some(b"[]".to_vec()));
        assert_eq!(reopened.get("other").await?, Some(vec![0, 159, 146, 150]));

        Ok(())
    }

    #[tokio::test]
    async fn unreadable_file_starts_empty() -> TestResult {
        let dir = tempdir()?;
        let path = dir.path().join("store.json");

        fs::write(&path, b"{ truncated").await?;

        let store = JsonFileStore::open(&path).await?;

        assert_eq!(store.get("cart").await?, None);

        store.set("cart", b"[]".to_vec()).await?;

        assert_eq!(store.get("cart").await?, Some(b"[]".to_vec()));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_base64_value_is_reported() -> TestResult {
        let dir = tempdir()?;
        let path = dir.path().join("store.json");

        fs::write(&path, br#"{"cart":"%%%"}"#).await?;

        let store = JsonFileStore::open(&path).await?;
        let result = store.get("cart").await;

        assert!(
            matches!(result, Err(StorageError::Encoding(ref key, _)) if key == "cart"),
            "expected Encoding error, got {result:?}"
        );

        Ok(())
    }
}
