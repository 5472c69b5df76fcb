//! File store abstraction for uploaded media.
//!
//! Uploaded files are persisted under a per-video directory, keyed as
//! `"{video_id}/{stored_name}"`. The stored name is generated and
//! collision-resistant; the user's original filename is never used as a key.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{AppError, AppResult};

/// File store trait for upload persistence.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write file data under the given key.
    async fn put(&self, key: &str, data: &[u8]) -> AppResult<()>;

    /// Delete a file. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check if a file exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Read a file's contents.
    async fn get(&self, key: &str) -> AppResult<Vec<u8>>;

    /// Get the public URL for a key.
    fn public_url(&self, key: &str) -> String;
}

/// Shared handle to a file store implementation.
pub type FileStoreRef = Arc<dyn FileStore>;

/// Local filesystem file store.
#[derive(Clone)]
pub struct LocalFileStore {
    base_path: PathBuf,
    base_url: String,
}

impl LocalFileStore {
    /// Create a new local file store.
    #[must_use]
    pub const fn new(base_path: PathBuf, base_url: String) -> Self {
        Self { base_path, base_url }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, key: &str, data: &[u8]) -> AppResult<()> {
        let path = self.path_for(key);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::FileStore(format!("Failed to create directory: {e}")))?;
        }

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::FileStore(format!("Failed to write file: {e}")))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            tokio::fs::remove_file(&path)
                .await
                .map_err(|e| AppError::FileStore(format!("Failed to delete file: {e}")))?;
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.path_for(key).exists())
    }

    async fn get(&self, key: &str) -> AppResult<Vec<u8>> {
        tokio::fs::read(self.path_for(key))
            .await
            .map_err(|e| AppError::FileStore(format!("Failed to read file: {e}")))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

/// No-op file store for testing or when file storage is disabled.
#[derive(Clone, Default)]
pub struct NoOpFileStore {
    base_url: String,
}

impl NoOpFileStore {
    /// Create a new no-op file store.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl FileStore for NoOpFileStore {
    async fn put(&self, _key: &str, _data: &[u8]) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }

    async fn exists(&self, _key: &str) -> AppResult<bool> {
        Ok(false)
    }

    async fn get(&self, key: &str) -> AppResult<Vec<u8>> {
        Err(AppError::FileStore(format!("No such file: {key}")))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

/// Generate a unique stored name for an uploaded file.
///
/// The stored name keeps the original extension (when reasonable) but is
/// otherwise random, so repeated uploads of the same original filename never
/// collide.
#[must_use]
pub fn generate_stored_name(original_name: &str) -> String {
    let extension = original_name
        .rfind('.')
        .filter(|&pos| pos > 0 && pos < original_name.len() - 1)
        .map(|pos| &original_name[pos + 1..])
        .filter(|ext| ext.len() <= 10 && !ext.is_empty())
        .unwrap_or("bin");

    format!("{}.{}", Uuid::new_v4(), extension)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_stored_name() {
        let name = generate_stored_name("thumb.png");
        assert!(name.ends_with(".png"));
        assert_ne!(name, "thumb.png");
    }

    #[test]
    fn test_generate_stored_name_no_extension() {
        let name = generate_stored_name("trailer");
        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn test_generate_stored_name_unique() {
        assert_ne!(generate_stored_name("a.mp4"), generate_stored_name("a.mp4"));
    }

    #[tokio::test]
    async fn test_local_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("catalog-store-{}", Uuid::new_v4()));
        let store = LocalFileStore::new(dir.clone(), "/files".to_string());

        store.put("video1/a.png", b"data").await.unwrap();
        assert!(store.exists("video1/a.png").await.unwrap());
        assert_eq!(store.get("video1/a.png").await.unwrap(), b"data");

        store.delete("video1/a.png").await.unwrap();
        assert!(!store.exists("video1/a.png").await.unwrap());

        // Deleting a missing key succeeds
        store.delete("video1/a.png").await.unwrap();

        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[test]
    fn test_public_url() {
        let store = NoOpFileStore::new("http://localhost:3000/files/".to_string());
        assert_eq!(
            store.public_url("video1/a.png"),
            "http://localhost:3000/files/video1/a.png"
        );
    }
}
