//! Workflow stages.

use serde::{Deserialize, Serialize};

/// Named states of the generation workflow, in execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum WorkflowStage {
    /// Not started
    Idle,
    /// Generating the narration script
    #[strum(to_string = "script generation")]
    ScriptGeneration,
    /// Decomposing the prompt into scenes
    #[strum(to_string = "scene generation")]
    SceneGeneration,
    /// Generating one image per scene
    #[strum(to_string = "image generation")]
    ImageGeneration,
    /// Synthesizing narration audio
    #[strum(to_string = "audio generation")]
    AudioGeneration,
    /// All stages succeeded
    Complete,
    /// A stage failed; terminal
    Failed,
}

impl WorkflowStage {
    /// True for `Complete` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStage::Complete | WorkflowStage::Failed)
    }
}
