//! Trait definitions for credential lookup and the three generation services.

use async_trait::async_trait;
use reelsmith_core::{Provider, SceneDescriptor, ScriptLength, Voice};
use reelsmith_error::ReelsmithResult;

/// Read-only access to provider secrets.
///
/// Lookups never fail: absence is a valid answer that callers must check
/// before issuing a network request.
pub trait CredentialStore: Send + Sync {
    /// Secret for `provider`, or `None` when not configured.
    fn get(&self, provider: Provider) -> Option<String>;
}

/// Produces narration text from a prompt.
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    /// Generate a narration script of roughly the requested length.
    ///
    /// Makes exactly one attempt.
    async fn generate_script(&self, prompt: &str, length: ScriptLength) -> ReelsmithResult<String>;
}

/// Turns a prompt into an ordered set of scene descriptors.
#[async_trait]
pub trait SceneDecomposer: Send + Sync {
    /// Request `count` scenes derived from `prompt`.
    ///
    /// Returns exactly the descriptors the provider's payload contains.
    async fn generate_scenes(
        &self,
        prompt: &str,
        count: usize,
    ) -> ReelsmithResult<Vec<SceneDescriptor>>;
}

/// Renders one text description into an image with a chosen backend model.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Generate image bytes for `description` using `model`.
    async fn synthesize_image(&self, model: &str, description: &str) -> ReelsmithResult<Vec<u8>>;

    /// Cheap authenticated request that fails fast on a missing or
    /// rejected credential.
    async fn validate_credential(&self) -> ReelsmithResult<()>;
}

/// Voice discovery and speech synthesis.
#[async_trait]
pub trait NarrationSynthesizer: Send + Sync {
    /// Voices available to the configured account, in provider order.
    async fn list_voices(&self) -> ReelsmithResult<Vec<Voice>>;

    /// Synthesize `text` with `voice_id`, returning encoded audio.
    async fn synthesize_speech(&self, text: &str, voice_id: &str) -> ReelsmithResult<Vec<u8>>;
}
