//! Voice listing command handler.

use super::load_config;
use reelsmith::{NarrationSynthesizer, ReelsmithResult, credential_store, speech_client};
use std::path::Path;
use std::sync::Arc;

/// Print each voice the speech key can use, first (default) voice first.
pub async fn list_voices(config: Option<&Path>, keys: Option<&Path>) -> ReelsmithResult<()> {
    let config = load_config(config)?;
    let narrator = speech_client(&config, Arc::new(credential_store(keys)?))?;

    let voices = narrator.list_voices().await?;
    if voices.is_empty() {
        println!("No voices available");
    }
    for (i, voice) in voices.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!("{}{}", voice, marker);
    }
    Ok(())
}
