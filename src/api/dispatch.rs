//! Fire-and-forget hand-off from the intake Lambda to the worker.

use async_trait::async_trait;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use aws_sdk_sqs::Client as SqsClient;
use tracing::info;

use crate::core::config::IntakeConfig;
use crate::core::models::AskRequest;
use crate::errors::RelayError;

/// One-way delivery of a request to the worker.
///
/// `dispatch` returns once the request is accepted by the transport. It never
/// waits for, or reports on, the worker's own outcome.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: &AskRequest) -> Result<(), RelayError>;
}

/// Invokes the worker function with `InvocationType::Event`.
pub struct LambdaInvokeDispatcher {
    client: LambdaClient,
    function_name: String,
}

impl LambdaInvokeDispatcher {
    #[must_use]
    pub fn new(sdk_config: &aws_config::SdkConfig, function_name: String) -> Self {
        Self {
            client: LambdaClient::new(sdk_config),
            function_name,
        }
    }
}

#[async_trait]
impl Dispatcher for LambdaInvokeDispatcher {
    async fn dispatch(&self, request: &AskRequest) -> Result<(), RelayError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| RelayError::DispatchError(format!("Failed to serialize request: {e}")))?;

        let output = self
            .client
            .invoke()
            .function_name(&self.function_name)
            .invocation_type(InvocationType::Event)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                RelayError::DispatchError(format!(
                    "Failed to invoke {}: {}",
                    self.function_name,
                    aws_sdk_lambda::error::DisplayErrorContext(&e)
                ))
            })?;

        info!(
            "Invoked {} asynchronously (status={})",
            self.function_name,
            output.status_code()
        );
        Ok(())
    }
}

/// Enqueues the request on an SQS queue feeding the worker.
pub struct SqsDispatcher {
    client: SqsClient,
    queue_url: String,
}

impl SqsDispatcher {
    #[must_use]
    pub fn new(sdk_config: &aws_config::SdkConfig, queue_url: String) -> Self {
        Self {
            client: SqsClient::new(sdk_config),
            queue_url,
        }
    }
}

#[async_trait]
impl Dispatcher for SqsDispatcher {
    async fn dispatch(&self, request: &AskRequest) -> Result<(), RelayError> {
        let message_body = serde_json::to_string(request)
            .map_err(|e| RelayError::DispatchError(format!("Failed to serialize request: {e}")))?;

        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message_body)
            .send()
            .await
            .map_err(|e| {
                RelayError::AwsError(format!(
                    "Failed to send message to SQS: {}",
                    aws_sdk_sqs::error::DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }
}

/// Build the dispatcher selected by `config`, with freshly loaded AWS settings.
pub async fn dispatcher_from_config(config: &IntakeConfig) -> Box<dyn Dispatcher> {
    let shared_config = aws_config::load_from_env().await;
    match &config.processing_queue_url {
        Some(queue_url) => Box::new(SqsDispatcher::new(&shared_config, queue_url.clone())),
        None => Box::new(LambdaInvokeDispatcher::new(
            &shared_config,
            config.worker_function_name.clone(),
        )),
    }
}
