use super::{GeminiRequest, GeminiResponse};
use crate::extraction::extract_json_array;
use crate::http::{
    build_client, check_status, require_credential, transport_error, trim_base,
    unexpected_response,
};
use async_trait::async_trait;
use reelsmith_core::{Provider, SceneDescriptor, ScriptConfig, ScriptLength};
use reelsmith_error::{GenerationError, GenerationErrorKind, ReelsmithResult};
use reelsmith_interface::{CredentialStore, SceneDecomposer, ScriptGenerator};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const PROVIDER: Provider = Provider::ScriptProvider;

/// Gemini API client.
///
/// Serves both the script and scene stages: they share a provider, a model
/// and a credential.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a Gemini client from the `[script]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        config: &ScriptConfig,
        credentials: Arc<dyn CredentialStore>,
        timeout: Option<Duration>,
    ) -> ReelsmithResult<Self> {
        debug!(model = %config.model, "Creating Gemini client");
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base(&config.base_url),
            model: config.model.clone(),
            credentials,
        })
    }

    /// Model identifier used for every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one prompt and returns the first candidate's text.
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: String) -> ReelsmithResult<String> {
        let api_key = require_credential(self.credentials.as_ref(), PROVIDER)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GeminiRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        let response = check_status(PROVIDER, response).await?;

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| unexpected_response(PROVIDER, format!("invalid JSON body: {}", e)))?;

        let text = body
            .first_text()
            .ok_or_else(|| unexpected_response(PROVIDER, "response has no generated text"))?;

        debug!(text_len = text.len(), "Received Gemini response");
        Ok(text.to_string())
    }
}

fn script_prompt(prompt: &str, length: ScriptLength) -> String {
    format!(
        "Write the narration script for a short video about the following idea:\n\n\
         {prompt}\n\n\
         The narration should be {} long. Return only the words to be spoken, \
         with no title, headings, scene markers or stage directions.",
        length.directive()
    )
}

fn scene_prompt(prompt: &str, count: usize) -> String {
    format!(
        "Break the following video idea into exactly {count} visual scenes:\n\n\
         {prompt}\n\n\
         Respond with a JSON array of {count} objects. Each object must have a \
         \"title\" field (a few words) and a \"description\" field (a detailed visual \
         description suitable as a prompt for an image generator). \
         Output only the JSON array."
    )
}

#[async_trait]
impl ScriptGenerator for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn generate_script(&self, prompt: &str, length: ScriptLength) -> ReelsmithResult<String> {
        let text = self.generate_text(script_prompt(prompt, length)).await?;
        let script = text.trim();
        if script.is_empty() {
            return Err(unexpected_response(PROVIDER, "generated script is empty").into());
        }
        Ok(script.to_string())
    }
}

#[async_trait]
impl SceneDecomposer for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn generate_scenes(
        &self,
        prompt: &str,
        count: usize,
    ) -> ReelsmithResult<Vec<SceneDescriptor>> {
        let text = self.generate_text(scene_prompt(prompt, count)).await?;
        let payload = extract_json_array(&text)?;

        let scenes: Vec<SceneDescriptor> = serde_json::from_str(payload).map_err(|e| {
            let preview: String = payload.chars().take(100).collect();
            GenerationError::new(GenerationErrorKind::Parse(format!(
                "Scene payload is not an array of title/description objects: {} (JSON: {}...)",
                e, preview
            )))
        })?;

        if scenes.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::Parse(
                "Scene payload is an empty array".to_string(),
            ))
            .into());
        }
        if scenes.len() != count {
            warn!(
                requested = count,
                received = scenes.len(),
                "Scene count differs from request"
            );
        }

        debug!(scenes = scenes.len(), "Parsed scene descriptors");
        Ok(scenes)
    }
}
