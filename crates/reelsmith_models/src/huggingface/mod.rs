//! Hugging Face text-to-image inference client.

mod client;

pub use client::{HuggingFaceClient, InferenceRequest};
