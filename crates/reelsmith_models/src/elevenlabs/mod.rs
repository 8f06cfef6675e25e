//! ElevenLabs voice listing and text-to-speech client.

mod client;
mod dto;

pub use client::ElevenLabsClient;
pub use dto::{SpeechRequest, VoiceSettings};
