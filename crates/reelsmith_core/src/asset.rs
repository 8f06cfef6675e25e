//! Generated assets and references to their stored copies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An artifact produced by one workflow stage.
///
/// Assets are immutable once produced. Binary assets are handed to a media
/// store, which returns an [`AssetReference`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum GeneratedAsset {
    /// Narration script text
    Script(String),
    /// Raster image for one scene
    Image {
        /// Zero-based scene index this image illustrates
        scene_index: usize,
        /// Encoded image bytes
        bytes: Vec<u8>,
    },
    /// Narration audio
    Audio(Vec<u8>),
}

impl GeneratedAsset {
    /// Media type of a binary asset; `None` for the script.
    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            GeneratedAsset::Script(_) => None,
            GeneratedAsset::Image { .. } => Some(MediaType::Image),
            GeneratedAsset::Audio(_) => Some(MediaType::Audio),
        }
    }

    /// MIME type recorded when the asset is stored.
    pub fn mime_type(&self) -> &'static str {
        match self {
            GeneratedAsset::Script(_) => "text/plain",
            GeneratedAsset::Image { .. } => "image/png",
            GeneratedAsset::Audio(_) => "audio/mpeg",
        }
    }

    /// Raw payload; the script as UTF-8 bytes.
    pub fn payload(&self) -> &[u8] {
        match self {
            GeneratedAsset::Script(text) => text.as_bytes(),
            GeneratedAsset::Image { bytes, .. } => bytes,
            GeneratedAsset::Audio(bytes) => bytes,
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.payload().len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reference to a stored binary asset.
///
/// Contains everything needed to fetch the bytes back from the storage
/// backend that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetReference {
    /// Unique identifier for this reference
    pub id: Uuid,
    /// SHA-256 hash of the content
    pub content_hash: String,
    /// Storage backend name (e.g., "filesystem", "memory")
    pub storage_backend: String,
    /// Backend-specific path/key to the content
    pub storage_path: String,
    /// Size of the content in bytes
    pub size_bytes: u64,
    /// Type of media
    pub media_type: MediaType,
    /// MIME type
    pub mime_type: String,
}

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Image content (PNG, JPEG, WebP, etc.)
    Image,
    /// Audio content (MP3, WAV, OGG, etc.)
    Audio,
    /// Video content (reserved)
    Video,
}

impl MediaType {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
