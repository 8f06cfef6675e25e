mod test_utils;

use reelsmith_core::{GeneratedAsset, MediaType, Provider, ScriptLength, WorkflowStage};
use reelsmith_error::GenerationErrorKind;
use reelsmith_storage::{InMemoryStorage, MediaStorage};
use reelsmith_workflow::{BatchImageGenerator, VideoWorkflow, WorkflowObserver, WorkflowOutcome};
use std::sync::{Arc, Mutex};
use test_utils::{MockImages, MockNarrator, MockScenes, MockScript, missing, three_scenes};

const SCRIPT: &str = "Waves fold over the harbor wall.";

struct Harness {
    script: Arc<MockScript>,
    scenes: Arc<MockScenes>,
    images: Arc<MockImages>,
    narrator: Arc<MockNarrator>,
    storage: Arc<InMemoryStorage>,
}

impl Harness {
    fn healthy() -> Self {
        Self {
            script: Arc::new(MockScript::new_success(SCRIPT)),
            scenes: Arc::new(MockScenes::new_success(three_scenes())),
            images: Arc::new(MockImages::new()),
            narrator: Arc::new(MockNarrator::new_success()),
            storage: Arc::new(InMemoryStorage::new()),
        }
    }

    fn workflow(&self) -> anyhow::Result<VideoWorkflow> {
        self.workflow_with(None)
    }

    fn workflow_with(
        &self,
        observer: Option<Arc<dyn WorkflowObserver>>,
    ) -> anyhow::Result<VideoWorkflow> {
        let mut builder = VideoWorkflow::builder()
            .script_generator(self.script.clone())
            .scene_decomposer(self.scenes.clone())
            .image_generator(BatchImageGenerator::new(
                self.images.clone(),
                vec!["m1".to_string(), "m2".to_string(), "m3".to_string()],
            ))
            .narrator(self.narrator.clone())
            .storage(self.storage.clone());
        if let Some(observer) = observer {
            builder = builder.observer(observer);
        }
        Ok(builder.build()?)
    }
}

#[derive(Default)]
struct Recorder {
    stages: Mutex<Vec<WorkflowStage>>,
    assets: Mutex<Vec<String>>,
}

impl WorkflowObserver for Recorder {
    fn on_stage(&self, stage: WorkflowStage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn on_asset(&self, asset: &GeneratedAsset) {
        let label = match asset {
            GeneratedAsset::Script(_) => "script".to_string(),
            GeneratedAsset::Image { scene_index, .. } => format!("image-{scene_index}"),
            GeneratedAsset::Audio(_) => "audio".to_string(),
        };
        self.assets.lock().unwrap().push(label);
    }
}

#[tokio::test]
async fn test_healthy_run_completes() -> anyhow::Result<()> {
    let harness = Harness::healthy();
    let outcome = harness.workflow()?.run("A harbor town", ScriptLength::Short).await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.stage(), WorkflowStage::Complete);
    let result = outcome.into_result()?;
    assert_eq!(result.script.as_deref(), Some(SCRIPT));
    assert_eq!(result.scene_prompts.len(), 3);
    assert_eq!(result.image_refs.len(), result.scene_prompts.len());
    assert!(result.audio_ref.is_some());
    assert!(result.video_ref.is_none());

    let second = harness.storage.retrieve(&result.image_refs[1]).await?;
    assert_eq!(second, b"m1|scene b");
    Ok(())
}

#[tokio::test]
async fn test_stored_assets_carry_their_media_types() -> anyhow::Result<()> {
    let harness = Harness::healthy();
    let result = harness
        .workflow()?
        .run("A harbor town", ScriptLength::Short)
        .await
        .into_result()?;

    for reference in &result.image_refs {
        assert_eq!(reference.media_type, MediaType::Image);
        assert_eq!(reference.mime_type, "image/png");
    }
    let audio = result.audio_ref.as_ref().expect("audio stored");
    assert_eq!(audio.media_type, MediaType::Audio);
    assert_eq!(audio.mime_type, "audio/mpeg");
    assert_eq!(harness.storage.len().await, 4);
    Ok(())
}

#[tokio::test]
async fn test_scenes_use_prompt_not_script() -> anyhow::Result<()> {
    let harness = Harness::healthy();
    harness.workflow()?.run("A harbor town", ScriptLength::Medium).await;

    assert_eq!(harness.scenes.prompts(), vec![("A harbor town".to_string(), 3)]);
    Ok(())
}

#[tokio::test]
async fn test_audio_uses_first_voice_and_full_script() -> anyhow::Result<()> {
    let harness = Harness::healthy();
    harness.workflow()?.run("A harbor town", ScriptLength::Medium).await;

    assert_eq!(
        harness.narrator.synthesized(),
        vec![("voice-1".to_string(), SCRIPT.to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_script_credential_fails_first_stage() -> anyhow::Result<()> {
    let harness = Harness {
        script: Arc::new(MockScript::new_error(|| missing(Provider::ScriptProvider))),
        ..Harness::healthy()
    };
    let outcome = harness.workflow()?.run("anything", ScriptLength::Short).await;

    let WorkflowOutcome::Failed(failure) = outcome else {
        panic!("run should fail");
    };
    assert_eq!(failure.stage, WorkflowStage::ScriptGeneration);
    assert!(matches!(
        failure.error.generation_kind(),
        Some(GenerationErrorKind::CredentialMissing(_))
    ));
    assert!(failure.partial.is_empty());
    assert!(failure.partial.script.is_none());
    assert!(failure.partial.scene_prompts.is_empty());
    assert!(failure.partial.image_refs.is_empty());
    assert!(failure.partial.audio_ref.is_none());
    assert_eq!(harness.scenes.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_scene_failure_keeps_script() -> anyhow::Result<()> {
    let harness = Harness {
        scenes: Arc::new(MockScenes::new_error(|| {
            reelsmith_error::GenerationError::new(GenerationErrorKind::Parse("no array".into())).into()
        })),
        ..Harness::healthy()
    };
    let outcome = harness.workflow()?.run("anything", ScriptLength::Short).await;

    assert_eq!(outcome.stage(), WorkflowStage::SceneGeneration);
    assert_eq!(outcome.result().script.as_deref(), Some(SCRIPT));
    assert!(outcome.result().scene_prompts.is_empty());
    assert!(harness.images.attempts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_image_failure_keeps_script_and_scenes() -> anyhow::Result<()> {
    let harness = Harness {
        images: Arc::new(MockImages::new().fail_description("scene b")),
        ..Harness::healthy()
    };
    let outcome = harness.workflow()?.run("anything", ScriptLength::Short).await;

    assert_eq!(outcome.stage(), WorkflowStage::ImageGeneration);
    assert_eq!(
        outcome.error().and_then(|e| e.generation_kind()).and_then(|k| k.scene_index()),
        Some(1)
    );
    let partial = outcome.result();
    assert!(partial.script.is_some());
    assert_eq!(partial.scene_prompts.len(), 3);
    assert!(partial.image_refs.is_empty());
    assert!(partial.audio_ref.is_none());
    assert!(harness.narrator.synthesized().is_empty());
    assert!(harness.storage.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_audio_failure_keeps_images() -> anyhow::Result<()> {
    let harness = Harness {
        narrator: Arc::new(MockNarrator::failing_synthesis()),
        ..Harness::healthy()
    };
    let outcome = harness.workflow()?.run("anything", ScriptLength::Short).await;

    assert_eq!(outcome.stage(), WorkflowStage::AudioGeneration);
    assert!(outcome.error().is_some());
    let partial = outcome.result();
    assert_eq!(partial.script.as_deref(), Some(SCRIPT));
    assert_eq!(partial.scene_prompts.len(), 3);
    assert_eq!(partial.image_refs.len(), 3);
    assert!(partial.audio_ref.is_none());
    Ok(())
}

#[tokio::test]
async fn test_empty_voice_list_is_upstream_error() -> anyhow::Result<()> {
    let harness = Harness {
        narrator: Arc::new(MockNarrator::without_voices()),
        ..Harness::healthy()
    };
    let outcome = harness.workflow()?.run("anything", ScriptLength::Short).await;

    assert_eq!(outcome.stage(), WorkflowStage::AudioGeneration);
    assert!(
        outcome
            .error()
            .and_then(|e| e.generation_kind())
            .is_some_and(|k| k.is_upstream())
    );
    Ok(())
}

#[tokio::test]
async fn test_observer_sees_stages_and_assets_in_order() -> anyhow::Result<()> {
    let harness = Harness::healthy();
    let recorder = Arc::new(Recorder::default());
    harness
        .workflow_with(Some(recorder.clone()))?
        .run("anything", ScriptLength::Short)
        .await;

    assert_eq!(
        *recorder.stages.lock().unwrap(),
        vec![
            WorkflowStage::Idle,
            WorkflowStage::ScriptGeneration,
            WorkflowStage::SceneGeneration,
            WorkflowStage::ImageGeneration,
            WorkflowStage::AudioGeneration,
            WorkflowStage::Complete,
        ]
    );
    assert_eq!(
        *recorder.assets.lock().unwrap(),
        vec!["script", "image-0", "image-1", "image-2", "audio"]
    );
    Ok(())
}

#[tokio::test]
async fn test_observer_sees_failed_stage() -> anyhow::Result<()> {
    let harness = Harness {
        narrator: Arc::new(MockNarrator::failing_synthesis()),
        ..Harness::healthy()
    };
    let recorder = Arc::new(Recorder::default());
    harness
        .workflow_with(Some(recorder.clone()))?
        .run("anything", ScriptLength::Short)
        .await;

    let stages = recorder.stages.lock().unwrap();
    assert_eq!(stages.last(), Some(&WorkflowStage::Failed));
    assert!(!recorder.assets.lock().unwrap().contains(&"audio".to_string()));
    Ok(())
}

#[test]
fn test_builder_rejects_zero_scenes() {
    let harness = Harness::healthy();
    let built = VideoWorkflow::builder()
        .script_generator(harness.script.clone())
        .scene_decomposer(harness.scenes.clone())
        .image_generator(BatchImageGenerator::new(harness.images.clone(), vec!["m1".into()]))
        .narrator(harness.narrator.clone())
        .storage(harness.storage.clone())
        .scene_count(0usize)
        .build();
    assert!(built.is_err());
}

#[test]
fn test_builder_requires_every_service() {
    let harness = Harness::healthy();
    let built = VideoWorkflow::builder()
        .script_generator(harness.script.clone())
        .build();
    assert!(built.is_err());
}
