use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::Client;
use aws_sdk_bedrockagentruntime::error::DisplayErrorContext;
use aws_sdk_bedrockagentruntime::types::{
    KnowledgeBaseQuery, KnowledgeBaseRetrievalConfiguration, KnowledgeBaseRetrievalResult,
    KnowledgeBaseVectorSearchConfiguration, RetrievalResultLocation, SearchType,
};
use tracing::debug;

use super::{KnowledgeBase, KnowledgeBaseHit};
use crate::core::models::SourceLocation;
use crate::errors::RelayError;

/// Bedrock Knowledge Bases client (`bedrock-agent-runtime` `Retrieve`).
pub struct BedrockKnowledgeBase {
    client: Client,
    knowledge_base_id: String,
}

impl BedrockKnowledgeBase {
    #[must_use]
    pub fn new(sdk_config: &aws_config::SdkConfig, knowledge_base_id: String) -> Self {
        Self {
            client: Client::new(sdk_config),
            knowledge_base_id,
        }
    }
}

#[async_trait]
impl KnowledgeBase for BedrockKnowledgeBase {
    async fn retrieve(
        &self,
        query: &str,
        result_count: usize,
    ) -> Result<Vec<KnowledgeBaseHit>, RelayError> {
        let number_of_results = i32::try_from(result_count).map_err(|_| {
            RelayError::RetrievalError(format!("result count {result_count} is out of range"))
        })?;

        let retrieval_query = KnowledgeBaseQuery::builder().text(query).build();

        let vector_search = KnowledgeBaseVectorSearchConfiguration::builder()
            .number_of_results(number_of_results)
            .override_search_type(SearchType::Semantic)
            .build();

        let retrieval_configuration = KnowledgeBaseRetrievalConfiguration::builder()
            .vector_search_configuration(vector_search)
            .build();

        debug!(
            "Retrieving {} results from knowledge base {}",
            number_of_results, self.knowledge_base_id
        );

        let response = self
            .client
            .retrieve()
            .knowledge_base_id(&self.knowledge_base_id)
            .retrieval_query(retrieval_query)
            .retrieval_configuration(retrieval_configuration)
            .send()
            .await
            .map_err(|e| RelayError::RetrievalError(DisplayErrorContext(&e).to_string()))?;

        Ok(response.retrieval_results().iter().map(to_hit).collect())
    }
}

fn to_hit(result: &KnowledgeBaseRetrievalResult) -> KnowledgeBaseHit {
    KnowledgeBaseHit {
        content: result.content().map(|c| c.text().to_string()),
        source: hit_source(result.location()),
        score: result.score(),
    }
}

/// Normalizes a result location: S3 URI first, then any connector URL, then
/// the bare location type.
fn hit_source(location: Option<&RetrievalResultLocation>) -> SourceLocation {
    let Some(location) = location else {
        return SourceLocation::Unknown;
    };

    if let Some(uri) = location.s3_location().and_then(|l| l.uri()) {
        return SourceLocation::S3 {
            uri: uri.to_string(),
        };
    }

    let url = location
        .web_location()
        .and_then(|l| l.url())
        .or_else(|| location.confluence_location().and_then(|l| l.url()))
        .or_else(|| location.share_point_location().and_then(|l| l.url()))
        .or_else(|| location.salesforce_location().and_then(|l| l.url()));

    match url {
        Some(url) => SourceLocation::Url {
            url: url.to_string(),
        },
        None => SourceLocation::Other {
            kind: location.r#type().as_str().to_string(),
        },
    }
}
