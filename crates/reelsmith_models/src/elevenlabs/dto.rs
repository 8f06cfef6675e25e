//! ElevenLabs REST shapes.

use derive_builder::Builder;
use derive_getters::Getters;
use reelsmith_core::Voice;
use serde::{Deserialize, Serialize};

/// Voice tuning sent with every synthesis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct VoiceSettings {
    /// Stability (0.0 to 1.0)
    stability: f32,
    /// Similarity boost (0.0 to 1.0)
    similarity_boost: f32,
}

impl VoiceSettings {
    /// Creates voice settings.
    pub fn new(stability: f32, similarity_boost: f32) -> Self {
        Self {
            stability,
            similarity_boost,
        }
    }
}

/// Text-to-speech request body.
///
/// # Examples
///
/// ```
/// use reelsmith_models::{SpeechRequest, VoiceSettings};
///
/// let request = SpeechRequest::builder()
///     .text("Hello there")
///     .model_id("eleven_monolingual_v1")
///     .voice_settings(VoiceSettings::new(0.5, 0.75))
///     .build()
///     .unwrap();
/// assert_eq!(request.text(), "Hello there");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SpeechRequest {
    /// Text to speak
    text: String,
    /// Synthesis model
    model_id: String,
    /// Voice tuning
    voice_settings: VoiceSettings,
}

impl SpeechRequest {
    /// Creates a new builder for `SpeechRequest`.
    pub fn builder() -> SpeechRequestBuilder {
        SpeechRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VoicesResponse {
    #[serde(default)]
    pub(crate) voices: Vec<Voice>,
}
