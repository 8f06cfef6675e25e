//! Provider clients for Reelsmith.
//!
//! Each client implements one of the `reelsmith_interface` generation traits
//! against a concrete REST API:
//!
//! - [`GeminiClient`]: narration scripts and scene decomposition
//! - [`HuggingFaceClient`]: text-to-image inference with a credential probe
//! - [`ElevenLabsClient`]: voice listing and text-to-speech
//!
//! Clients resolve their secret from a shared `CredentialStore` on every call,
//! so a missing key surfaces as `CredentialMissing` before any request is sent.
//! HTTP 401 and 403 map to `CredentialInvalid` for every provider.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use reelsmith_core::{ReelsmithConfig, ScriptLength};
//! use reelsmith_interface::ScriptGenerator;
//! use reelsmith_models::GeminiClient;
//! use reelsmith_storage::EnvCredentialStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReelsmithConfig::load()?;
//! let client = GeminiClient::new(
//!     &config.script,
//!     Arc::new(EnvCredentialStore::new()),
//!     config.http.timeout(),
//! )?;
//! let script = client.generate_script("Lighthouses of Maine", ScriptLength::Short).await?;
//! println!("{script}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod elevenlabs;
mod extraction;
mod gemini;
mod http;
mod huggingface;

pub use elevenlabs::{ElevenLabsClient, SpeechRequest, VoiceSettings};
pub use extraction::extract_json_array;
pub use gemini::{GeminiClient, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};
pub use huggingface::{HuggingFaceClient, InferenceRequest};
