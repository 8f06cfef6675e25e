//! Scripted provider doubles for workflow tests.

#![allow(dead_code)]

use async_trait::async_trait;
use reelsmith_core::{Provider, SceneDescriptor, ScriptLength, Voice};
use reelsmith_error::{GenerationError, GenerationErrorKind, ReelsmithError, ReelsmithResult};
use reelsmith_interface::{ImageSynthesizer, NarrationSynthesizer, SceneDecomposer, ScriptGenerator};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub fn missing(provider: Provider) -> ReelsmithError {
    GenerationError::new(GenerationErrorKind::CredentialMissing(provider.to_string())).into()
}

pub fn upstream(provider: Provider, status: u16) -> ReelsmithError {
    GenerationError::new(GenerationErrorKind::from_status(
        provider.to_string(),
        status,
        "scripted failure",
    ))
    .into()
}

pub fn three_scenes() -> Vec<SceneDescriptor> {
    vec![
        SceneDescriptor::new("A", "scene a"),
        SceneDescriptor::new("B", "scene b"),
        SceneDescriptor::new("C", "scene c"),
    ]
}

/// Script generator returning fixed text or a fixed error.
pub struct MockScript {
    reply: Result<String, fn() -> ReelsmithError>,
    call_count: Arc<Mutex<usize>>,
}

impl MockScript {
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn new_error(error: fn() -> ReelsmithError) -> Self {
        Self {
            reply: Err(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ScriptGenerator for MockScript {
    async fn generate_script(&self, _prompt: &str, _length: ScriptLength) -> ReelsmithResult<String> {
        *self.call_count.lock().unwrap() += 1;
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

/// Scene decomposer returning fixed scenes and recording the prompts it saw.
pub struct MockScenes {
    reply: Result<Vec<SceneDescriptor>, fn() -> ReelsmithError>,
    prompts: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockScenes {
    pub fn new_success(scenes: Vec<SceneDescriptor>) -> Self {
        Self {
            reply: Ok(scenes),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn new_error(error: fn() -> ReelsmithError) -> Self {
        Self {
            reply: Err(error),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<(String, usize)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SceneDecomposer for MockScenes {
    async fn generate_scenes(
        &self,
        prompt: &str,
        count: usize,
    ) -> ReelsmithResult<Vec<SceneDescriptor>> {
        self.prompts.lock().unwrap().push((prompt.to_string(), count));
        match &self.reply {
            Ok(scenes) => Ok(scenes.clone()),
            Err(make) => Err(make()),
        }
    }
}

/// Image synthesizer that fails for chosen descriptions or models.
///
/// Successful images are `"<model>|<description>"` as bytes so tests can
/// tell which model produced them.
pub struct MockImages {
    probe: Option<fn() -> ReelsmithError>,
    failing_descriptions: HashSet<String>,
    failing_models: HashSet<String>,
    attempts: Arc<Mutex<Vec<(String, String)>>>,
    probe_count: Arc<Mutex<usize>>,
}

impl MockImages {
    pub fn new() -> Self {
        Self {
            probe: None,
            failing_descriptions: HashSet::new(),
            failing_models: HashSet::new(),
            attempts: Arc::new(Mutex::new(Vec::new())),
            probe_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn fail_description(mut self, description: &str) -> Self {
        self.failing_descriptions.insert(description.to_string());
        self
    }

    pub fn fail_model(mut self, model: &str) -> Self {
        self.failing_models.insert(model.to_string());
        self
    }

    pub fn fail_probe(mut self, error: fn() -> ReelsmithError) -> Self {
        self.probe = Some(error);
        self
    }

    /// `(model, description)` pairs in attempt order.
    pub fn attempts(&self) -> Vec<(String, String)> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn probe_count(&self) -> usize {
        *self.probe_count.lock().unwrap()
    }
}

#[async_trait]
impl ImageSynthesizer for MockImages {
    async fn synthesize_image(&self, model: &str, description: &str) -> ReelsmithResult<Vec<u8>> {
        self.attempts
            .lock()
            .unwrap()
            .push((model.to_string(), description.to_string()));

        if self.failing_descriptions.contains(description) || self.failing_models.contains(model) {
            return Err(upstream(Provider::ImageProvider, 503));
        }
        Ok(format!("{model}|{description}").into_bytes())
    }

    async fn validate_credential(&self) -> ReelsmithResult<()> {
        *self.probe_count.lock().unwrap() += 1;
        match self.probe {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

/// Narrator with a fixed voice list and optional synthesis failure.
pub struct MockNarrator {
    voices: Vec<Voice>,
    fail_synthesis: bool,
    synthesized: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockNarrator {
    pub fn new_success() -> Self {
        Self {
            voices: vec![Voice::new("voice-1", "First"), Voice::new("voice-2", "Second")],
            fail_synthesis: false,
            synthesized: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn without_voices() -> Self {
        Self {
            voices: Vec::new(),
            ..Self::new_success()
        }
    }

    pub fn failing_synthesis() -> Self {
        Self {
            fail_synthesis: true,
            ..Self::new_success()
        }
    }

    /// `(voice_id, text)` pairs synthesized so far.
    pub fn synthesized(&self) -> Vec<(String, String)> {
        self.synthesized.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrationSynthesizer for MockNarrator {
    async fn list_voices(&self) -> ReelsmithResult<Vec<Voice>> {
        Ok(self.voices.clone())
    }

    async fn synthesize_speech(&self, text: &str, voice_id: &str) -> ReelsmithResult<Vec<u8>> {
        self.synthesized
            .lock()
            .unwrap()
            .push((voice_id.to_string(), text.to_string()));
        if self.fail_synthesis {
            return Err(upstream(Provider::SpeechProvider, 500));
        }
        Ok(b"ID3 narration".to_vec())
    }
}
