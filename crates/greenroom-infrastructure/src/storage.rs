//! Directory-of-JSON-documents storage.
//!
//! Each collection is a flat directory where document `k` is stored as
//! `k.json`. Saves go through a temporary file and an atomic rename, so a
//! crash mid-write never leaves a truncated document behind. There is no
//! cross-process locking: concurrent writers race at document granularity
//! and the last rename wins.

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A handle to one collection directory.
pub struct JsonDirStorage {
    base_dir: PathBuf,
}

impl JsonDirStorage {
    /// Opens (creating if necessary) the collection directory.
    pub async fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)
            .await
            .with_context(|| format!("Failed to create collection directory {:?}", base_dir))?;
        Ok(Self { base_dir })
    }

    /// Returns the collection directory path.
    pub fn base_path(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves a document key to its file path, rejecting keys that would
    /// escape the collection directory.
    fn document_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            bail!("Invalid document key: {:?}", key);
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }

    /// Loads a single document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Document found and parsed
    /// - `Ok(None)`: No document stored under this key
    /// - `Err(_)`: Read or parse failure
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.document_path(key)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read document {:?}", path));
            }
        };
        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse document {:?}", path))?;
        Ok(Some(value))
    }

    /// Loads every document in the collection, keyed by file stem.
    ///
    /// Non-JSON files in the directory are ignored.
    pub async fn load_all<T: DeserializeOwned>(&self) -> Result<BTreeMap<String, T>> {
        let mut documents = BTreeMap::new();
        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .with_context(|| format!("Failed to read collection directory {:?}", self.base_dir))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let bytes = fs::read(&path)
                .await
                .with_context(|| format!("Failed to read document {:?}", path))?;
            let value = serde_json::from_slice(&bytes)
                .with_context(|| format!("Failed to parse document {:?}", path))?;
            documents.insert(key.to_string(), value);
        }

        Ok(documents)
    }

    /// Saves a document, replacing any existing one under the same key.
    ///
    /// Writes to `{key}.json.tmp` first and renames into place.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.document_path(key)?;
        let tmp_path = self.base_dir.join(format!("{key}.json.tmp"));

        let bytes =
            serde_json::to_vec_pretty(value).context("Failed to serialize document to JSON")?;
        fs::write(&tmp_path, &bytes)
            .await
            .with_context(|| format!("Failed to write document {:?}", tmp_path))?;
        fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("Failed to move document into place at {:?}", path))?;
        Ok(())
    }

    /// Saves every document in the map as one batch.
    ///
    /// Writes are awaited in sequence and the first failure aborts the
    /// batch; documents already renamed into place stay.
    pub async fn save_all<T: Serialize>(&self, documents: &BTreeMap<String, T>) -> Result<()> {
        for (key, value) in documents {
            self.save(key, value).await?;
        }
        Ok(())
    }

    /// Deletes a document. Deleting a missing document is not an error.
    pub async fn delete(&self, key: &str) -> Result<()> {
        let path = self.document_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete document {:?}", path)),
        }
    }
}
