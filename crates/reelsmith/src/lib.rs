//! Reelsmith: prompt to narrated, illustrated media bundle.
//!
//! Reelsmith turns one idea into a narration script, a set of scene
//! descriptions, one image per scene, and narration audio, then packages them
//! into a zip bundle.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use reelsmith::{ReelsmithConfig, ScriptLength, Services, credential_store};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReelsmithConfig::load()?;
//! let credentials = Arc::new(credential_store(None)?);
//! let services = Services::from_config(&config, credentials)?;
//!
//! let outcome = services.workflow.run("Lighthouses of Maine", ScriptLength::Short).await;
//! services.exporter.export_to_file(outcome.result(), "bundle.zip").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `reelsmith_error` - Error types
//! - `reelsmith_core` - Data model and layered configuration
//! - `reelsmith_interface` - Provider and credential traits
//! - `reelsmith_storage` - Media and credential stores
//! - `reelsmith_models` - Gemini, Hugging Face and ElevenLabs clients
//! - `reelsmith_workflow` - Staged workflow, image fallback, bundle export
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod services;

pub use services::{Services, credential_store, credential_store_with_env, speech_client};

pub use reelsmith_core::*;
pub use reelsmith_error::*;
pub use reelsmith_interface::*;
pub use reelsmith_models::*;
pub use reelsmith_storage::*;
pub use reelsmith_workflow::*;
