//! Aggregate result of one workflow run.

use crate::{AssetReference, SceneDescriptor};
use serde::{Deserialize, Serialize};

/// Everything a workflow run accumulated.
///
/// On success every field except `video_ref` is populated. On failure the
/// fields hold whatever earlier stages produced, so a caller can still preview
/// or export partial work.
///
/// `video_ref` is reserved and never populated by this version.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{SceneDescriptor, WorkflowResult};
///
/// let mut result = WorkflowResult::default();
/// assert!(result.is_empty());
///
/// result.script = Some("Once upon a time".to_string());
/// result.scene_prompts.push(SceneDescriptor::new("Opening", "A quiet village"));
/// assert!(!result.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// Generated narration script
    pub script: Option<String>,
    /// Scene descriptors, in scene order
    pub scene_prompts: Vec<SceneDescriptor>,
    /// Stored images, index-aligned with `scene_prompts`
    pub image_refs: Vec<AssetReference>,
    /// Stored narration audio
    pub audio_ref: Option<AssetReference>,
    /// Reserved for rendered video; always `None`
    pub video_ref: Option<AssetReference>,
}

impl WorkflowResult {
    /// True when nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.script.is_none()
            && self.scene_prompts.is_empty()
            && self.image_refs.is_empty()
            && self.audio_ref.is_none()
    }
}
