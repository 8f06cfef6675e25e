//! Media and credential stores for Reelsmith.
//!
//! Generated images and audio are persisted through the [`MediaStorage`]
//! trait, which hands back an [`AssetReference`] the workflow result records
//! and the bundle exporter later resolves. Two backends ship here:
//!
//! - [`FileSystemStorage`]: content-addressed files under a base directory
//! - [`InMemoryStorage`]: a process-local map, for tests and dry runs
//!
//! Provider secrets are looked up through `CredentialStore` implementations:
//! in memory, environment variables, a TOML key file, or a chain of those.
//!
//! # Example
//!
//! ```rust
//! use reelsmith_core::MediaType;
//! use reelsmith_storage::{InMemoryStorage, MediaMetadata, MediaStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! let metadata = MediaMetadata::new(MediaType::Image, "image/png");
//!
//! let reference = storage.store(b"png bytes", &metadata).await?;
//! let retrieved = storage.retrieve(&reference).await?;
//! assert_eq!(retrieved, b"png bytes");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use reelsmith_core::{AssetReference, MediaType};
use reelsmith_error::ReelsmithResult;
use sha2::{Digest, Sha256};

mod credentials;
mod filesystem;
mod memory;

pub use credentials::{
    ChainedCredentialStore, EnvCredentialStore, FileCredentialStore, InMemoryCredentialStore,
};
pub use filesystem::FileSystemStorage;
pub use memory::InMemoryStorage;
pub use reelsmith_error::{StorageError, StorageErrorKind};

/// Trait for pluggable media storage backends.
#[async_trait::async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store media and return a reference.
    ///
    /// Implementations compute a content hash, persist the bytes, and return
    /// a reference that `retrieve` accepts.
    async fn store(&self, data: &[u8], metadata: &MediaMetadata)
    -> ReelsmithResult<AssetReference>;

    /// Retrieve media by reference.
    async fn retrieve(&self, reference: &AssetReference) -> ReelsmithResult<Vec<u8>>;

    /// Delete media by reference.
    async fn delete(&self, reference: &AssetReference) -> ReelsmithResult<()>;

    /// Check if media exists.
    async fn exists(&self, reference: &AssetReference) -> ReelsmithResult<bool>;
}

/// Metadata about media being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMetadata {
    /// Type of media (image, audio, video)
    pub media_type: MediaType,
    /// MIME type (e.g., "image/png", "audio/mpeg")
    pub mime_type: String,
}

impl MediaMetadata {
    /// Creates media metadata.
    pub fn new(media_type: MediaType, mime_type: impl Into<String>) -> Self {
        Self {
            media_type,
            mime_type: mime_type.into(),
        }
    }
}

/// Compute the SHA-256 hex digest used as the content address.
pub(crate) fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
