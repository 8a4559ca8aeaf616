//! Knowledge base retrieval

pub mod bedrock;

use async_trait::async_trait;
use tracing::info;

use crate::core::models::{RetrievedPassage, SourceLocation};
use crate::errors::RelayError;

pub use bedrock::BedrockKnowledgeBase;

/// Placeholder used when a hit carries no text content.
pub const MISSING_CONTENT: &str = "No content available";

/// A single raw result as returned by a knowledge base, before numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBaseHit {
    pub content: Option<String>,
    pub source: SourceLocation,
    pub score: Option<f64>,
}

/// Semantic search over a managed knowledge base.
///
/// Implementations return hits in relevance order and must not reorder them.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    async fn retrieve(
        &self,
        query: &str,
        result_count: usize,
    ) -> Result<Vec<KnowledgeBaseHit>, RelayError>;
}

/// Fetch up to `result_count` passages relevant to `question`.
///
/// A blank question short-circuits to an empty result without touching the
/// knowledge base. Errors from the knowledge base are returned as-is.
pub async fn retrieve_passages(
    knowledge_base: &dyn KnowledgeBase,
    question: &str,
    result_count: usize,
) -> Result<Vec<RetrievedPassage>, RelayError> {
    if question.trim().is_empty() {
        return Ok(Vec::new());
    }

    let hits = knowledge_base.retrieve(question, result_count).await?;
    info!("Knowledge base returned {} results", hits.len());

    Ok(number_hits(hits))
}

/// Turn raw hits into passages numbered `1..=N` in the order given.
#[must_use]
pub fn number_hits(hits: Vec<KnowledgeBaseHit>) -> Vec<RetrievedPassage> {
    hits.into_iter()
        .enumerate()
        .map(|(idx, hit)| RetrievedPassage {
            index: idx + 1,
            content: hit
                .content
                .unwrap_or_else(|| MISSING_CONTENT.to_string()),
            source: hit.source,
            score: hit.score.into(),
        })
        .collect()
}
