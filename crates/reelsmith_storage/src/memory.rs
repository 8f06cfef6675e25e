//! Process-local media storage.

use crate::{MediaMetadata, MediaStorage, content_hash};
use reelsmith_core::AssetReference;
use reelsmith_error::{ReelsmithResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

const BACKEND: &str = "memory";

/// Media storage backed by a hash map keyed on content hash.
///
/// Contents live only as long as the value does.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct blobs held.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// True when no blobs are held.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl MediaStorage for InMemoryStorage {
    async fn store(
        &self,
        data: &[u8],
        metadata: &MediaMetadata,
    ) -> ReelsmithResult<AssetReference> {
        let hash = content_hash(data);
        self.blobs
            .write()
            .await
            .entry(hash.clone())
            .or_insert_with(|| data.to_vec());

        tracing::debug!(hash = %hash, size = data.len(), "Stored media in memory");

        Ok(AssetReference {
            id: Uuid::new_v4(),
            storage_path: format!("memory://{}", hash),
            content_hash: hash,
            storage_backend: BACKEND.to_string(),
            size_bytes: data.len() as u64,
            media_type: metadata.media_type,
            mime_type: metadata.mime_type.clone(),
        })
    }

    async fn retrieve(&self, reference: &AssetReference) -> ReelsmithResult<Vec<u8>> {
        self.blobs
            .read()
            .await
            .get(&reference.content_hash)
            .cloned()
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone())).into()
            })
    }

    async fn delete(&self, reference: &AssetReference) -> ReelsmithResult<()> {
        match self.blobs.write().await.remove(&reference.content_hash) {
            Some(_) => Ok(()),
            None => Err(
                StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone()))
                    .into(),
            ),
        }
    }

    async fn exists(&self, reference: &AssetReference) -> ReelsmithResult<bool> {
        Ok(self.blobs.read().await.contains_key(&reference.content_hash))
    }
}
