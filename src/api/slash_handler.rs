//! Handler for the `/ask` slash command.

use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::dispatch::Dispatcher;
use super::helpers::{INTAKE_FAILURE_MESSAGE, ok_ephemeral, ok_in_channel, processing_message};
use super::parsing::parse_slack_event;
use crate::core::models::AskRequest;
use crate::errors::RelayError;

/// Handle a slash command from Slack.
///
/// Parses the form body, hands an [`AskRequest`] to `dispatcher` and returns
/// the Lambda response to send back to Slack. The response is always a 200;
/// any failure becomes an ephemeral apology.
pub async fn handle_slash_command(dispatcher: &dyn Dispatcher, body: &str) -> Value {
    match accept_command(dispatcher, body).await {
        Ok(request) => ok_in_channel(&processing_message(&request.user_id)),
        Err(e) => {
            error!("Failed to accept slash command: {}", e);
            ok_ephemeral(INTAKE_FAILURE_MESSAGE)
        }
    }
}

async fn accept_command(dispatcher: &dyn Dispatcher, body: &str) -> Result<AskRequest, RelayError> {
    let slack_event = parse_slack_event(body);

    let request = AskRequest {
        question: slack_event.text,
        response_url: slack_event.response_url,
        user_id: slack_event.user_id,
        correlation_id: Uuid::new_v4().to_string(),
    };

    info!(
        correlation_id = %request.correlation_id,
        command = %slack_event.command,
        channel_id = %slack_event.channel_id,
        user_id = %request.user_id,
        "Dispatching question to worker"
    );

    dispatcher.dispatch(&request).await?;
    Ok(request)
}
