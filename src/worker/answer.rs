use tracing::{error, info};

use crate::ai::{AnswerGenerator, build_prompt};
use crate::core::models::RetrievedPassage;

/// Answer used when retrieval found nothing.
pub const NO_DOCUMENTS_MESSAGE: &str = "No relevant documents found. Please try another question.";

/// Answer used when the model call fails.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Sorry, an error occurred while generating the response. Please try again later.";

/// Generate an answer grounded in `passages`.
///
/// Never fails: no passages means no model call, and model errors degrade to
/// [`GENERATION_FAILURE_MESSAGE`].
pub async fn generate_answer(
    generator: &dyn AnswerGenerator,
    question: &str,
    passages: &[RetrievedPassage],
) -> String {
    if passages.is_empty() {
        info!("No passages retrieved, skipping model call");
        return NO_DOCUMENTS_MESSAGE.to_string();
    }

    let prompt = build_prompt(question, passages);
    match generator.generate(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Answer generation failed: {}", e);
            GENERATION_FAILURE_MESSAGE.to_string()
        }
    }
}

/// Human-readable reference list, one block per passage.
#[must_use]
pub fn format_references(passages: &[RetrievedPassage]) -> String {
    passages
        .iter()
        .map(|p| {
            format!(
                "*Reference Document {}*\nContent: {}\nSource: {}\nRelevance: {}\n\n",
                p.index, p.content, p.source, p.score
            )
        })
        .collect()
}
