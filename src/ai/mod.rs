//! Answer generation

pub mod client;
pub mod prompt_builder;

use async_trait::async_trait;

use crate::errors::RelayError;

pub use client::BedrockConverseClient;
pub use prompt_builder::{GenerationPrompt, InferenceParams, SYSTEM_PROMPT, build_prompt};

/// A hosted text-generation model.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Run one single-turn request and return the first text segment.
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, RelayError>;
}
