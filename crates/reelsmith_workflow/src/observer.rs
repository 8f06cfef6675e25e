//! Progress callbacks for workflow runs.

use reelsmith_core::{GeneratedAsset, WorkflowStage};
use tracing::info;

/// Receives stage transitions and emitted assets while a run progresses.
///
/// Both methods default to no-ops so implementors override only what they
/// need. Callbacks run inline on the workflow task and should return quickly.
pub trait WorkflowObserver: Send + Sync {
    /// Called on entering `stage`: `Idle` once at the start, then each
    /// stage through to a terminal one.
    fn on_stage(&self, _stage: WorkflowStage) {}

    /// Called once per asset, in emission order.
    fn on_asset(&self, _asset: &GeneratedAsset) {}
}

/// Logs progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl WorkflowObserver for TracingObserver {
    fn on_stage(&self, stage: WorkflowStage) {
        info!(stage = %stage, "Workflow stage");
    }

    fn on_asset(&self, asset: &GeneratedAsset) {
        match asset {
            GeneratedAsset::Script(text) => {
                info!(words = text.split_whitespace().count(), "Script ready")
            }
            GeneratedAsset::Image { scene_index, bytes } => {
                info!(scene = scene_index + 1, bytes = bytes.len(), "Scene image ready")
            }
            GeneratedAsset::Audio(bytes) => info!(bytes = bytes.len(), "Narration ready"),
        }
    }
}
