use crate::http::{
    build_client, check_status, require_credential, transport_error, trim_base,
    unexpected_response,
};
use async_trait::async_trait;
use reelsmith_core::{ImageConfig, Provider};
use reelsmith_error::ReelsmithResult;
use reelsmith_interface::{CredentialStore, ImageSynthesizer};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

const PROVIDER: Provider = Provider::ImageProvider;

/// Inference request body: the scene description as `inputs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Text prompt
    pub inputs: String,
}

/// Hugging Face Inference API client.
///
/// The model is chosen per call so the batch generator can walk its fallback
/// ladder with one client.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    probe_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("base_url", &self.base_url)
            .field("probe_url", &self.probe_url)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceClient {
    /// Creates a client from the `[images]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        config: &ImageConfig,
        credentials: Arc<dyn CredentialStore>,
        timeout: Option<Duration>,
    ) -> ReelsmithResult<Self> {
        debug!(base_url = %config.base_url, "Creating Hugging Face client");
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base(&config.base_url),
            probe_url: config.probe_url.clone(),
            credentials,
        })
    }
}

#[async_trait]
impl ImageSynthesizer for HuggingFaceClient {
    #[instrument(skip(self, description), fields(description_len = description.len()))]
    async fn synthesize_image(&self, model: &str, description: &str) -> ReelsmithResult<Vec<u8>> {
        let api_key = require_credential(self.credentials.as_ref(), PROVIDER)?;
        let url = format!("{}/models/{}", self.base_url, model);
        debug!(url = %url, "Sending image inference request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&InferenceRequest {
                inputs: description.to_string(),
            })
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        let response = check_status(PROVIDER, response).await?;

        // A JSON body on success is an error envelope, not an image.
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));
        if is_json {
            let body = response.text().await.unwrap_or_default();
            return Err(unexpected_response(
                PROVIDER,
                format!("expected image bytes, got JSON: {}", body),
            )
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        if bytes.is_empty() {
            return Err(unexpected_response(PROVIDER, "image body is empty").into());
        }

        debug!(bytes = bytes.len(), "Received image");
        Ok(bytes.to_vec())
    }

    #[instrument(skip(self), fields(probe_url = %self.probe_url))]
    async fn validate_credential(&self) -> ReelsmithResult<()> {
        let api_key = require_credential(self.credentials.as_ref(), PROVIDER)?;

        let response = self
            .client
            .get(&self.probe_url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        check_status(PROVIDER, response).await?;
        info!("Image provider credential accepted");
        Ok(())
    }
}
