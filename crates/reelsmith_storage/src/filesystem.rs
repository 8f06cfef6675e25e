//! Filesystem-based media storage implementation.
//!
//! Files are stored by content hash, organized by media type, so identical
//! outputs from repeated runs share one file on disk.

use crate::{MediaMetadata, MediaStorage, content_hash};
use reelsmith_core::{AssetReference, MediaType};
use reelsmith_error::{ReelsmithResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BACKEND: &str = "filesystem";

/// Filesystem storage backend.
///
/// Layout: `{base_path}/{type}/{hash[0:2]}/{hash[2:4]}/{hash}`
///
/// ```text
/// reelsmith-media/
/// ├── images/
/// │   └── ab/
/// │       └── cd/
/// │           └── abcdef123456...
/// └── audio/
///     └── 12/
///         └── 34/
///             └── 123456abcdef...
/// ```
///
/// Writes go to a per-writer temp file that is renamed into place. An existing
/// file is only reused after its hash verifies.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend, creating the base directory
    /// if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> ReelsmithResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem media storage");
        Ok(Self { base_path })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, hash: &str, media_type: MediaType) -> PathBuf {
        let type_dir = match media_type {
            MediaType::Image => "images",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        };

        self.base_path
            .join(type_dir)
            .join(&hash[0..2])
            .join(&hash[2..4])
            .join(hash)
    }

    fn reference(hash: String, path: &Path, size: usize, metadata: &MediaMetadata) -> AssetReference {
        AssetReference {
            id: Uuid::new_v4(),
            content_hash: hash,
            storage_backend: BACKEND.to_string(),
            storage_path: path.to_string_lossy().to_string(),
            size_bytes: size as u64,
            media_type: metadata.media_type,
            mime_type: metadata.mime_type.clone(),
        }
    }
}

/// True when `path` exists and its bytes hash to `hash`.
async fn holds_content(path: &Path, hash: &str) -> bool {
    match tokio::fs::read(path).await {
        Ok(existing) => content_hash(&existing) == hash,
        Err(_) => false,
    }
}

#[async_trait::async_trait]
impl MediaStorage for FileSystemStorage {
    #[tracing::instrument(skip(self, data, metadata), fields(size = data.len(), media_type = %metadata.media_type))]
    async fn store(
        &self,
        data: &[u8],
        metadata: &MediaMetadata,
    ) -> ReelsmithResult<AssetReference> {
        let hash = content_hash(data);
        let path = self.path_for(&hash, metadata.media_type);

        if holds_content(&path, &hash).await {
            tracing::debug!(hash = %hash, path = %path.display(), "Media already stored");
            return Ok(Self::reference(hash, &path, data.len(), metadata));
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Each writer gets its own temp file; concurrent stores of the same
        // content must never share one.
        let temp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = tokio::fs::write(&temp_path, data).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
            .into());
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            if holds_content(&path, &hash).await {
                tracing::debug!(hash = %hash, "Concurrent writer stored the same media");
                return Ok(Self::reference(hash, &path, data.len(), metadata));
            }
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(
            hash = %hash,
            path = %path.display(),
            size = data.len(),
            "Stored media file"
        );

        Ok(Self::reference(hash, &path, data.len(), metadata))
    }

    #[tracing::instrument(skip(self, reference), fields(hash = %reference.content_hash))]
    async fn retrieve(&self, reference: &AssetReference) -> ReelsmithResult<Vec<u8>> {
        let path = Path::new(&reference.storage_path);

        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        let actual = content_hash(&data);
        if actual != reference.content_hash {
            return Err(StorageError::new(StorageErrorKind::Integrity(format!(
                "expected {}, got {}",
                reference.content_hash, actual
            )))
            .into());
        }

        tracing::debug!(size = data.len(), "Retrieved media file");
        Ok(data)
    }

    #[tracing::instrument(skip(self, reference), fields(hash = %reference.content_hash))]
    async fn delete(&self, reference: &AssetReference) -> ReelsmithResult<()> {
        let path = Path::new(&reference.storage_path);

        tokio::fs::remove_file(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone()))
            } else {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "delete {}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::info!(path = %path.display(), "Deleted media file");
        Ok(())
    }

    async fn exists(&self, reference: &AssetReference) -> ReelsmithResult<bool> {
        Ok(tokio::fs::try_exists(&reference.storage_path)
            .await
            .unwrap_or(false))
    }
}
