use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{StorageError, StorageResult};

/// Local filesystem storage rooted at a single flat directory.
///
/// Uploads land at `<base_path>/<filename>`. An existing file of the same
/// name is overwritten without warning; concurrent writes to the same name
/// race and the last writer wins.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Open the storage directory.
    ///
    /// The directory must already exist: it is provisioned by the operator,
    /// not by the service. Fails with `ConfigError` when it is missing or is
    /// not a directory, so misconfiguration surfaces at startup rather than
    /// on the first upload.
    pub fn open(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        let meta = std::fs::metadata(&base_path).map_err(|e| {
            StorageError::ConfigError(format!(
                "Storage directory {} is not accessible: {}",
                base_path.display(),
                e
            ))
        })?;
        if !meta.is_dir() {
            return Err(StorageError::ConfigError(format!(
                "Storage path {} is not a directory",
                base_path.display()
            )));
        }

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a filename to its path inside the base directory.
    ///
    /// The filename must be a bare name: anything containing a path
    /// separator or a `..` component is rejected so no key can escape the
    /// storage directory. Callers are expected to have reduced
    /// client-supplied names to a basename already; this is the backstop.
    fn file_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename == "."
            || filename == ".."
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }

        Ok(self.base_path.join(filename))
    }

    /// Write `data` to `<base_path>/<filename>`, replacing any existing file.
    pub async fn store(&self, filename: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.file_path(filename)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Stored uploaded file"
        );

        Ok(())
    }

    /// Read a stored file back.
    pub async fn read(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.file_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(data)
    }

    /// Check whether a file exists in storage.
    pub async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.file_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}
