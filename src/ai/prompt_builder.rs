//! Prompt construction for grounded answers.

use crate::core::models::RetrievedPassage;

/// System instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "Please answer the question based on the following information. \
If information is not provided in the Source, please politely indicate that you don't know.";

/// Sampling parameters for a generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceParams {
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
            top_p: 0.8,
        }
    }
}

/// Everything a generator needs for one single-turn request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPrompt {
    pub system: String,
    pub user: String,
    pub params: InferenceParams,
}

/// Concatenate passages into the context block, one paragraph per passage.
#[must_use]
pub fn build_context_block(passages: &[RetrievedPassage]) -> String {
    passages
        .iter()
        .map(|p| format!("Content: {}\nSource: {}\n\n", p.content, p.source))
        .collect()
}

/// Build the single-turn prompt for `question` grounded in `passages`.
#[must_use]
pub fn build_prompt(question: &str, passages: &[RetrievedPassage]) -> GenerationPrompt {
    let context = build_context_block(passages);
    GenerationPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: format!("Context:\n{context}\n\nQuestion: {question}"),
        params: InferenceParams::default(),
    }
}
