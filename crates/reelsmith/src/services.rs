//! Wiring of concrete clients and stores from configuration.

use reelsmith_core::ReelsmithConfig;
use reelsmith_error::{ConfigError, ReelsmithResult};
use reelsmith_interface::CredentialStore;
use reelsmith_models::{ElevenLabsClient, GeminiClient, HuggingFaceClient};
use reelsmith_storage::{
    ChainedCredentialStore, EnvCredentialStore, FileCredentialStore, FileSystemStorage,
};
use reelsmith_workflow::{
    BatchImageGenerator, BundleExporter, TracingObserver, VideoWorkflow, WorkflowObserver,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Credential lookup for the CLI.
///
/// An explicit key file is consulted first, then the `REELSMITH_*_API_KEY`
/// environment variables.
///
/// # Errors
///
/// Returns an error if `keys` is given but cannot be read or parsed.
pub fn credential_store(keys: Option<&Path>) -> ReelsmithResult<ChainedCredentialStore> {
    credential_store_with_env(keys, EnvCredentialStore::new())
}

/// [`credential_store`] with a custom environment variable mapping.
///
/// # Errors
///
/// Returns an error if `keys` is given but cannot be read or parsed.
pub fn credential_store_with_env(
    keys: Option<&Path>,
    env: EnvCredentialStore,
) -> ReelsmithResult<ChainedCredentialStore> {
    let mut chain = ChainedCredentialStore::new();
    if let Some(path) = keys {
        chain = chain.with(FileCredentialStore::load(path)?);
    }
    Ok(chain.with(env))
}

/// Speech client alone, for commands that only talk to the speech provider.
///
/// Unlike [`Services::from_config`], this touches no media directory.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn speech_client(
    config: &ReelsmithConfig,
    credentials: Arc<dyn CredentialStore>,
) -> ReelsmithResult<ElevenLabsClient> {
    ElevenLabsClient::new(&config.speech, credentials, config.http.timeout())
}

/// A ready-to-run workflow plus the exporter reading from the same store.
#[derive(Debug)]
pub struct Services {
    /// Configured workflow
    pub workflow: VideoWorkflow,
    /// Exporter over the workflow's media store
    pub exporter: BundleExporter,
    /// Speech client, also used for voice listing
    pub narrator: Arc<ElevenLabsClient>,
}

impl Services {
    /// Build every client and the filesystem media store from `config`.
    ///
    /// A [`TracingObserver`] is always registered.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client or the media directory cannot be
    /// initialized.
    #[instrument(skip_all, fields(media_dir = %config.storage.media_dir.display()))]
    pub fn from_config(
        config: &ReelsmithConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> ReelsmithResult<Self> {
        Self::with_observers(config, credentials, Vec::new())
    }

    /// Like [`Services::from_config`], with extra observers after the
    /// tracing one.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client or the media directory cannot be
    /// initialized.
    pub fn with_observers(
        config: &ReelsmithConfig,
        credentials: Arc<dyn CredentialStore>,
        observers: Vec<Arc<dyn WorkflowObserver>>,
    ) -> ReelsmithResult<Self> {
        let timeout = config.http.timeout();

        let gemini = Arc::new(GeminiClient::new(&config.script, credentials.clone(), timeout)?);
        let images = Arc::new(HuggingFaceClient::new(
            &config.images,
            credentials.clone(),
            timeout,
        )?);
        let narrator = Arc::new(speech_client(config, credentials)?);
        let storage = Arc::new(FileSystemStorage::new(&config.storage.media_dir)?);

        let mut builder = VideoWorkflow::builder()
            .script_generator(gemini.clone())
            .scene_decomposer(gemini)
            .image_generator(BatchImageGenerator::new(images, config.images.models.clone()))
            .narrator(narrator.clone())
            .storage(storage.clone())
            .scene_count(config.workflow.scene_count)
            .observer(Arc::new(TracingObserver));
        for observer in observers {
            builder = builder.observer(observer);
        }
        let workflow = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid workflow: {}", e)))?;

        debug!(models = config.images.models.len(), "Services ready");
        Ok(Self {
            workflow,
            exporter: BundleExporter::new(storage),
            narrator,
        })
    }
}
