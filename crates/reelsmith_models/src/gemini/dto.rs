//! Gemini REST request and response shapes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Part text
    #[serde(default)]
    text: Option<String>,
}

impl GeminiPart {
    /// Creates a text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A content block made of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Ordered parts
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// `generateContent` request body.
///
/// # Examples
///
/// ```
/// use reelsmith_models::GeminiRequest;
///
/// let request = GeminiRequest::from_prompt("Describe a lighthouse");
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["contents"][0]["parts"][0]["text"], "Describe a lighthouse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiRequest {
    /// Conversation contents; a single user turn here
    contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// Single-turn request carrying one text prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart::new(prompt)],
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text at `candidates[0].content.parts[0].text`, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}
