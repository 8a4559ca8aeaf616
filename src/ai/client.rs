//! Bedrock Runtime (`Converse`) client module
//!
//! Encapsulates all model calls used to generate answers.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use super::AnswerGenerator;
use super::prompt_builder::GenerationPrompt;
use crate::errors::RelayError;

/// Generation client backed by a Bedrock foundation model
pub struct BedrockConverseClient {
    client: Client,
    model_id: String,
}

impl BedrockConverseClient {
    #[must_use]
    pub fn new(sdk_config: &aws_config::SdkConfig, model_id: String) -> Self {
        Self {
            client: Client::new(sdk_config),
            model_id,
        }
    }
}

#[async_trait]
impl AnswerGenerator for BedrockConverseClient {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, RelayError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Converse prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Invoking model {} with a {}-character user turn",
            self.model_id,
            prompt.user.chars().count()
        );

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.user.clone()))
            .build()
            .map_err(|e| RelayError::GenerationError(format!("Failed to build message: {e}")))?;

        let inference_config = InferenceConfiguration::builder()
            .max_tokens(prompt.params.max_tokens)
            .temperature(prompt.params.temperature)
            .top_p(prompt.params.top_p)
            .build();

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(prompt.system.clone()))
            .messages(message)
            .inference_config(inference_config)
            .send()
            .await
            .map_err(|e| RelayError::GenerationError(DisplayErrorContext(&e).to_string()))?;

        first_text_segment(&response)
    }
}

/// The answer is the text of the first content block of the output message.
fn first_text_segment(response: &ConverseOutput) -> Result<String, RelayError> {
    let message = response
        .output()
        .ok_or_else(|| RelayError::GenerationError("No output in response".to_string()))?
        .as_message()
        .map_err(|_| RelayError::GenerationError("Output is not a message".to_string()))?;

    message
        .content()
        .first()
        .ok_or_else(|| RelayError::GenerationError("No content in message".to_string()))?
        .as_text()
        .map(ToString::to_string)
        .map_err(|_| RelayError::GenerationError("First content block is not text".to_string()))
}
