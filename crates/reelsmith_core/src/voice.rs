//! Narration voices.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A voice offered by the speech provider.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_more::Display,
)]
#[display("{} ({})", name, voice_id)]
pub struct Voice {
    /// Provider-side voice identifier
    voice_id: String,
    /// Human-readable voice name
    name: String,
}

impl Voice {
    /// Creates a voice entry.
    pub fn new(voice_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            name: name.into(),
        }
    }
}
