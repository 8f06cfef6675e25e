//! The Reelsmith generation workflow.
//!
//! [`VideoWorkflow`] runs the stages in strict order (script, scenes, images,
//! audio) and accumulates what each stage produces. A failing stage halts the
//! run; everything gathered before it is returned alongside the error so the
//! caller can still preview or export it with [`BundleExporter`].
//!
//! Image generation goes through [`BatchImageGenerator`], which probes the
//! image credential once and then walks an ordered model ladder per scene.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use reelsmith_core::ScriptLength;
//! use reelsmith_interface::{ImageSynthesizer, NarrationSynthesizer, SceneDecomposer, ScriptGenerator};
//! use reelsmith_storage::InMemoryStorage;
//! use reelsmith_workflow::{BatchImageGenerator, BundleExporter, VideoWorkflow};
//!
//! # async fn example(
//! #     script: Arc<dyn ScriptGenerator>,
//! #     scenes: Arc<dyn SceneDecomposer>,
//! #     images: Arc<dyn ImageSynthesizer>,
//! #     narrator: Arc<dyn NarrationSynthesizer>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let storage = Arc::new(InMemoryStorage::new());
//! let workflow = VideoWorkflow::builder()
//!     .script_generator(script)
//!     .scene_decomposer(scenes)
//!     .image_generator(BatchImageGenerator::new(images, vec!["org/model".to_string()]))
//!     .narrator(narrator)
//!     .storage(storage.clone())
//!     .build()?;
//!
//! let outcome = workflow.run("A day at the harbor", ScriptLength::Short).await;
//! let bundle = BundleExporter::new(storage).export(outcome.result()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod export;
mod fallback;
mod observer;
mod workflow;

pub use batch::BatchImageGenerator;
pub use export::BundleExporter;
pub use fallback::{FallbackOutcome, ModelFailure, try_candidates};
pub use observer::{TracingObserver, WorkflowObserver};
pub use workflow::{VideoWorkflow, VideoWorkflowBuilder, WorkflowFailure, WorkflowOutcome};
