//! Gemini `generateContent` client for scripts and scene decomposition.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};
