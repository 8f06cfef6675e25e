//! Core data types for Reelsmith.
//!
//! This crate provides the data model shared by every stage of the media
//! generation workflow: scene descriptors, generated assets, stored asset
//! references, the aggregate workflow result, and layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod config;
mod length;
mod provider;
mod result;
mod scene;
mod stage;
#[cfg(feature = "otel")]
mod telemetry;
mod voice;

pub use asset::{AssetReference, GeneratedAsset, MediaType};
pub use config::{
    HttpConfig, ImageConfig, ReelsmithConfig, ScriptConfig, SpeechConfig, StorageConfig,
    WorkflowConfig,
};
pub use length::ScriptLength;
pub use provider::{Credential, Provider};
pub use result::WorkflowResult;
pub use scene::{SceneDescriptor, SceneDescriptorBuilder};
pub use stage::WorkflowStage;
#[cfg(feature = "otel")]
pub use telemetry::{init_telemetry, shutdown_telemetry};
pub use voice::Voice;
