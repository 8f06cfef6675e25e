//! The staged workflow state machine.

use crate::batch::BatchImageGenerator;
use crate::observer::WorkflowObserver;
use derive_builder::Builder;
use reelsmith_core::{
    AssetReference, GeneratedAsset, Provider, SceneDescriptor, ScriptLength,
    WorkflowResult, WorkflowStage,
};
use reelsmith_error::{
    GenerationError, GenerationErrorKind, ReelsmithError, ReelsmithResult, StorageError,
    StorageErrorKind,
};
use reelsmith_interface::{NarrationSynthesizer, SceneDecomposer, ScriptGenerator};
use reelsmith_storage::{MediaMetadata, MediaStorage};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// A failed run: the stage that failed, its error, and what earlier stages
/// produced.
#[derive(Debug)]
pub struct WorkflowFailure {
    /// Stage at which the run halted
    pub stage: WorkflowStage,
    /// First fatal error
    pub error: ReelsmithError,
    /// Accumulated result up to the failure
    pub partial: WorkflowResult,
}

/// Terminal outcome of [`VideoWorkflow::run`].
#[derive(Debug)]
pub enum WorkflowOutcome {
    /// Every stage succeeded
    Complete(WorkflowResult),
    /// A stage failed; partial work is preserved
    Failed(WorkflowFailure),
}

impl WorkflowOutcome {
    /// True when every stage succeeded.
    pub fn is_complete(&self) -> bool {
        matches!(self, WorkflowOutcome::Complete(_))
    }

    /// The complete or partial result.
    pub fn result(&self) -> &WorkflowResult {
        match self {
            WorkflowOutcome::Complete(result) => result,
            WorkflowOutcome::Failed(failure) => &failure.partial,
        }
    }

    /// The error, if the run failed.
    pub fn error(&self) -> Option<&ReelsmithError> {
        match self {
            WorkflowOutcome::Complete(_) => None,
            WorkflowOutcome::Failed(failure) => Some(&failure.error),
        }
    }

    /// `Complete`, or the stage at which the run failed.
    pub fn stage(&self) -> WorkflowStage {
        match self {
            WorkflowOutcome::Complete(_) => WorkflowStage::Complete,
            WorkflowOutcome::Failed(failure) => failure.stage,
        }
    }

    /// Convert into a `Result`, discarding the partial result on failure.
    pub fn into_result(self) -> ReelsmithResult<WorkflowResult> {
        match self {
            WorkflowOutcome::Complete(result) => Ok(result),
            WorkflowOutcome::Failed(failure) => Err(failure.error),
        }
    }
}

/// Per-run state. Each variant carries what the next stage consumes.
enum RunState {
    Script,
    Scenes {
        script: String,
    },
    Images {
        script: String,
        scenes: Vec<SceneDescriptor>,
    },
    Audio {
        script: String,
    },
    Complete,
}

impl RunState {
    fn stage(&self) -> WorkflowStage {
        match self {
            RunState::Script => WorkflowStage::ScriptGeneration,
            RunState::Scenes { .. } => WorkflowStage::SceneGeneration,
            RunState::Images { .. } => WorkflowStage::ImageGeneration,
            RunState::Audio { .. } => WorkflowStage::AudioGeneration,
            RunState::Complete => WorkflowStage::Complete,
        }
    }
}

/// Staged media generation workflow.
///
/// Stages run strictly in sequence, each awaiting its remote call before the
/// next begins. The result accumulator is only written after a stage succeeds,
/// so a failure leaves exactly the output of the stages before it.
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct VideoWorkflow {
    /// Narration script provider
    script_generator: Arc<dyn ScriptGenerator>,
    /// Scene decomposition provider
    scene_decomposer: Arc<dyn SceneDecomposer>,
    /// Image batch driver
    image_generator: BatchImageGenerator,
    /// Voice listing and speech synthesis
    narrator: Arc<dyn NarrationSynthesizer>,
    /// Where image and audio bytes are persisted
    storage: Arc<dyn MediaStorage>,
    /// Scenes requested per run
    #[builder(default = "3")]
    scene_count: usize,
    /// Progress observers
    #[builder(default, setter(custom))]
    observers: Vec<Arc<dyn WorkflowObserver>>,
}

impl VideoWorkflowBuilder {
    /// Register an observer; observers are notified in registration order.
    pub fn observer(mut self, observer: Arc<dyn WorkflowObserver>) -> Self {
        self.observers.get_or_insert_with(Vec::new).push(observer);
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self.scene_count == Some(0) {
            return Err("scene_count must be at least 1".to_string());
        }
        if self
            .image_generator
            .as_ref()
            .is_some_and(|images| images.models().is_empty())
        {
            return Err("image model ladder is empty".to_string());
        }
        Ok(())
    }
}

impl std::fmt::Debug for VideoWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoWorkflow")
            .field("image_generator", &self.image_generator)
            .field("scene_count", &self.scene_count)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl VideoWorkflow {
    /// Creates a new builder for `VideoWorkflow`.
    pub fn builder() -> VideoWorkflowBuilder {
        VideoWorkflowBuilder::default()
    }

    /// Scenes requested per run.
    pub fn scene_count(&self) -> usize {
        self.scene_count
    }

    /// Run every stage for `prompt`.
    ///
    /// Observers see `Idle` first, then each stage as it starts.
    ///
    /// Never returns early with a bare error: a failure yields
    /// [`WorkflowOutcome::Failed`] carrying the partial result.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), scene_count = self.scene_count))]
    pub async fn run(&self, prompt: &str, length: ScriptLength) -> WorkflowOutcome {
        let mut result = WorkflowResult::default();
        self.notify_stage(WorkflowStage::Idle);
        let mut state = RunState::Script;

        loop {
            let stage = state.stage();
            self.notify_stage(stage);

            let step = match state {
                RunState::Script => self.script_stage(prompt, length, &mut result).await,
                RunState::Scenes { script } => self.scene_stage(prompt, script, &mut result).await,
                RunState::Images { script, scenes } => {
                    self.image_stage(script, scenes, &mut result).await
                }
                RunState::Audio { script } => self.audio_stage(script, &mut result).await,
                RunState::Complete => {
                    info!(
                        scenes = result.scene_prompts.len(),
                        images = result.image_refs.len(),
                        "Workflow complete"
                    );
                    return WorkflowOutcome::Complete(result);
                }
            };

            match step {
                Ok(next) => state = next,
                Err(error) => {
                    error!(stage = %stage, error = %error, "Workflow stage failed");
                    self.notify_stage(WorkflowStage::Failed);
                    return WorkflowOutcome::Failed(WorkflowFailure {
                        stage,
                        error,
                        partial: result,
                    });
                }
            }
        }
    }

    async fn script_stage(
        &self,
        prompt: &str,
        length: ScriptLength,
        result: &mut WorkflowResult,
    ) -> ReelsmithResult<RunState> {
        let script = self.script_generator.generate_script(prompt, length).await?;

        result.script = Some(script.clone());
        self.notify_asset(&GeneratedAsset::Script(script.clone()));
        Ok(RunState::Scenes { script })
    }

    async fn scene_stage(
        &self,
        prompt: &str,
        script: String,
        result: &mut WorkflowResult,
    ) -> ReelsmithResult<RunState> {
        // Scenes derive from the user's idea, not from the narration.
        let scenes = self
            .scene_decomposer
            .generate_scenes(prompt, self.scene_count)
            .await?;

        debug!(scenes = scenes.len(), "Scenes decomposed");
        result.scene_prompts = scenes.clone();
        Ok(RunState::Images { script, scenes })
    }

    async fn image_stage(
        &self,
        script: String,
        scenes: Vec<SceneDescriptor>,
        result: &mut WorkflowResult,
    ) -> ReelsmithResult<RunState> {
        let images = self.image_generator.generate(&scenes).await?;
        let assets: Vec<GeneratedAsset> = images
            .into_iter()
            .enumerate()
            .map(|(scene_index, bytes)| GeneratedAsset::Image { scene_index, bytes })
            .collect();

        let mut refs = Vec::with_capacity(assets.len());
        for asset in &assets {
            refs.push(self.persist(asset).await?);
        }

        // Emitted only once the whole batch is stored.
        for asset in &assets {
            self.notify_asset(asset);
        }
        result.image_refs = refs;
        Ok(RunState::Audio { script })
    }

    async fn audio_stage(
        &self,
        script: String,
        result: &mut WorkflowResult,
    ) -> ReelsmithResult<RunState> {
        let voices = self.narrator.list_voices().await?;
        let voice = voices.first().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::UpstreamResponse {
                provider: Provider::SpeechProvider.to_string(),
                message: "no voices available".to_string(),
            })
        })?;
        debug!(voice = %voice, "Selected narration voice");

        let audio = self
            .narrator
            .synthesize_speech(&script, voice.voice_id())
            .await?;
        let asset = GeneratedAsset::Audio(audio);
        let reference = self.persist(&asset).await?;

        self.notify_asset(&asset);
        result.audio_ref = Some(reference);
        Ok(RunState::Complete)
    }

    async fn persist(&self, asset: &GeneratedAsset) -> ReelsmithResult<AssetReference> {
        let media_type = asset.media_type().ok_or_else(|| {
            StorageError::new(StorageErrorKind::UnsupportedMedia(
                "script text is kept inline".to_string(),
            ))
        })?;
        if asset.is_empty() {
            warn!(media_type = %media_type, "Storing empty payload");
        }

        let metadata = MediaMetadata::new(media_type, asset.mime_type());
        debug!(media_type = %media_type, bytes = asset.len(), "Persisting asset");
        self.storage.store(asset.payload(), &metadata).await
    }

    fn notify_stage(&self, stage: WorkflowStage) {
        for observer in &self.observers {
            observer.on_stage(stage);
        }
    }

    fn notify_asset(&self, asset: &GeneratedAsset) {
        for observer in &self.observers {
            observer.on_asset(asset);
        }
    }
}
