use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::deliver::HttpResponder;
use super::pipeline::{Worker, WorkerSettings};
use crate::ai::BedrockConverseClient;
use crate::core::config::WorkerConfig;
use crate::core::models::AskRequest;
use crate::errors::RelayError;
use crate::retrieval::BedrockKnowledgeBase;

/// Extract the requests carried by a worker event.
///
/// Accepts either a direct async-invoke payload (`{question, response_url,
/// user_id}`) or an SQS event whose record bodies hold that JSON. Records
/// that fail to parse are logged and skipped.
pub fn parse_worker_event(payload: &Value) -> Vec<AskRequest> {
    let Some(records) = payload.get("Records").and_then(Value::as_array) else {
        return match serde_json::from_value::<AskRequest>(payload.clone()) {
            Ok(request) => vec![request],
            Err(e) => {
                error!("Failed to parse worker payload into AskRequest: {}", e);
                Vec::new()
            }
        };
    };

    records
        .iter()
        .filter_map(|record| match parse_sqs_record(record) {
            Ok(request) => Some(request),
            Err(e) => {
                error!("Skipping SQS record: {}", e);
                None
            }
        })
        .collect()
}

fn parse_sqs_record(record: &Value) -> Result<AskRequest, RelayError> {
    let body = record
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::ParseError("SQS record has no string body".to_string()))?;
    serde_json::from_str(body).map_err(|e| {
        RelayError::ParseError(format!(
            "Failed to parse SQS message body into AskRequest: {e}"
        ))
    })
}

/// Lambda handler for the Worker entrypoint.
///
/// Always returns `Ok(())` once the event has been looked at, so the Lambda
/// service never re-runs an invocation and double-posts to Slack.
///
/// # Errors
///
/// Never returns an error for request-level failures.
pub async fn function_handler(config: &WorkerConfig, event: LambdaEvent<Value>) -> Result<(), Error> {
    info!(
        request_id = %event.context.request_id,
        "Worker Lambda received event"
    );

    let requests = parse_worker_event(&event.payload);
    if requests.is_empty() {
        warn!("Worker event carried no usable request, nothing to do");
        return Ok(());
    }

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let knowledge_base = BedrockKnowledgeBase::new(&sdk_config, config.knowledge_base_id.clone());
    let generator = BedrockConverseClient::new(&sdk_config, config.model_id.clone());
    let responder = HttpResponder::new();

    let worker = Worker::new(
        &knowledge_base,
        &generator,
        &responder,
        WorkerSettings::from(config),
    );

    for request in &requests {
        let outcome = worker.run(request).await;
        info!(correlation_id = %request.correlation_id, ?outcome, "Worker finished");
    }

    Ok(())
}
