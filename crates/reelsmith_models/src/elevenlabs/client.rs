use super::dto::VoicesResponse;
use super::{SpeechRequest, VoiceSettings};
use crate::http::{
    build_client, check_status, require_credential, transport_error, trim_base,
    unexpected_response,
};
use async_trait::async_trait;
use reelsmith_core::{Provider, SpeechConfig, Voice};
use reelsmith_error::{ConfigError, ReelsmithResult};
use reelsmith_interface::{CredentialStore, NarrationSynthesizer};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const PROVIDER: Provider = Provider::SpeechProvider;

/// ElevenLabs API client.
#[derive(Clone)]
pub struct ElevenLabsClient {
    client: Client,
    base_url: String,
    model_id: String,
    settings: VoiceSettings,
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url)
            .field("model_id", &self.model_id)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ElevenLabsClient {
    /// Creates a client from the `[speech]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        config: &SpeechConfig,
        credentials: Arc<dyn CredentialStore>,
        timeout: Option<Duration>,
    ) -> ReelsmithResult<Self> {
        debug!(model_id = %config.model_id, "Creating ElevenLabs client");
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base(&config.base_url),
            model_id: config.model_id.clone(),
            settings: VoiceSettings::new(config.stability, config.similarity_boost),
            credentials,
        })
    }
}

#[async_trait]
impl NarrationSynthesizer for ElevenLabsClient {
    #[instrument(skip(self))]
    async fn list_voices(&self) -> ReelsmithResult<Vec<Voice>> {
        let api_key = require_credential(self.credentials.as_ref(), PROVIDER)?;
        let url = format!("{}/v1/voices", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("xi-api-key", api_key)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        let response = check_status(PROVIDER, response).await?;
        let body: VoicesResponse = response
            .json()
            .await
            .map_err(|e| unexpected_response(PROVIDER, format!("invalid voices body: {}", e)))?;

        debug!(voices = body.voices.len(), "Listed voices");
        Ok(body.voices)
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize_speech(&self, text: &str, voice_id: &str) -> ReelsmithResult<Vec<u8>> {
        let api_key = require_credential(self.credentials.as_ref(), PROVIDER)?;
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);

        let request = SpeechRequest::builder()
            .text(text)
            .model_id(self.model_id.as_str())
            .voice_settings(self.settings)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid speech request: {}", e)))?;

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        let response = check_status(PROVIDER, response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        if bytes.is_empty() {
            return Err(unexpected_response(PROVIDER, "audio body is empty").into());
        }

        debug!(bytes = bytes.len(), "Received audio");
        Ok(bytes.to_vec())
    }
}
