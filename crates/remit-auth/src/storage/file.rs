//! JSON-file storage shared by every console process of the user.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use remit_core::error::AppError;

use super::DurableStorage;

/// Stores all keys in one JSON object on disk.
///
/// Every read goes to disk, so a key removed by another process is seen on
/// the next read. Writes replace the file atomically (temp file + rename).
#[derive(Debug)]
pub struct FileStorage {
    /// Location of the JSON file.
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::storage(format!(
                    "Session file '{}' is corrupt: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        // A corrupt file is overwritten rather than blocking every login.
        let mut entries = self.read_all().await.unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = match self.read_all().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                BTreeMap::new()
            }
        };
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&entries).await
    }
}
