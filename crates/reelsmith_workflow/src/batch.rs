//! Per-scene image generation over a model fallback ladder.

use crate::fallback::{FallbackOutcome, try_candidates};
use reelsmith_core::SceneDescriptor;
use reelsmith_error::{GenerationError, GenerationErrorKind, ReelsmithResult};
use reelsmith_interface::ImageSynthesizer;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Drives an [`ImageSynthesizer`] across every scene.
///
/// The image credential is probed once before any scene. Scenes are then
/// processed in order; each walks the model ladder until one model succeeds.
/// If a scene exhausts the ladder the whole batch fails with
/// `SceneGenerationFailed` and later scenes are not attempted.
#[derive(Clone)]
pub struct BatchImageGenerator {
    synthesizer: Arc<dyn ImageSynthesizer>,
    models: Vec<String>,
}

impl std::fmt::Debug for BatchImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchImageGenerator")
            .field("models", &self.models)
            .finish_non_exhaustive()
    }
}

impl BatchImageGenerator {
    /// Creates a batch generator with an ordered model ladder.
    pub fn new(synthesizer: Arc<dyn ImageSynthesizer>, models: Vec<String>) -> Self {
        Self {
            synthesizer,
            models,
        }
    }

    /// Model ladder in attempt order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Generate one encoded image per scene, index-aligned with `scenes`.
    ///
    /// # Errors
    ///
    /// - `CredentialMissing` / `CredentialInvalid` from the probe
    /// - `SceneGenerationFailed` for the first scene whose ladder is exhausted
    #[instrument(skip(self, scenes), fields(scenes = scenes.len(), models = self.models.len()))]
    pub async fn generate(&self, scenes: &[SceneDescriptor]) -> ReelsmithResult<Vec<Vec<u8>>> {
        self.synthesizer.validate_credential().await?;

        let mut images = Vec::with_capacity(scenes.len());
        for (scene_index, scene) in scenes.iter().enumerate() {
            let synthesizer = &self.synthesizer;
            let description = scene.description();

            let outcome = try_candidates(&self.models, |model| async move {
                synthesizer.synthesize_image(&model, description).await
            })
            .await;

            match outcome {
                FallbackOutcome::Success { value, model } => {
                    info!(
                        scene_index,
                        model = %model,
                        bytes = value.len(),
                        "Generated scene image"
                    );
                    images.push(value);
                }
                FallbackOutcome::Exhausted(failures) => {
                    error!(
                        scene_index,
                        attempts = failures.len(),
                        "Every model failed for scene"
                    );
                    return Err(GenerationError::new(GenerationErrorKind::SceneGenerationFailed {
                        scene_index,
                        attempts: failures.iter().map(ToString::to_string).collect(),
                    })
                    .into());
                }
            }
        }

        Ok(images)
    }
}
