//! Trait seams for Reelsmith.
//!
//! The workflow only ever talks to providers and credential stores through
//! these traits, so HTTP clients, test doubles, and alternative backends are
//! interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    CredentialStore, ImageSynthesizer, NarrationSynthesizer, SceneDecomposer, ScriptGenerator,
};
