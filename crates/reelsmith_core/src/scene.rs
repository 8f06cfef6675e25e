//! Scene descriptors produced by scene decomposition.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One structured scene: a short title plus the description used as the
/// image prompt.
///
/// Scene order is significant: the scene at index `i` drives image `i`.
///
/// # Examples
///
/// ```
/// use reelsmith_core::SceneDescriptor;
///
/// let scene = SceneDescriptor::new("Dawn", "A lighthouse at sunrise, mist over the water");
/// assert_eq!(scene.title(), "Dawn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SceneDescriptor {
    /// Short scene title
    title: String,
    /// Visual description used to prompt the image provider
    description: String,
}

impl SceneDescriptor {
    /// Creates a scene descriptor.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates a new builder for `SceneDescriptor`.
    pub fn builder() -> SceneDescriptorBuilder {
        SceneDescriptorBuilder::default()
    }
}
