//! API Lambda handler - acknowledges the slash command and dispatches the work.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::dispatch::{Dispatcher, dispatcher_from_config};
use super::helpers::{INTAKE_FAILURE_MESSAGE, ok_ephemeral};
use super::{parsing, slash_handler};
use crate::core::config::IntakeConfig;

/// Lambda handler for the API entrypoint.
///
/// Never fails for request-level problems: Slack always gets a 200 with
/// either the processing notice or an ephemeral apology.
///
/// # Errors
///
/// Returns an error only if the response cannot be produced at all, which
/// the current implementation never does.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    config: &IntakeConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!("API Lambda received request");
    let dispatcher = dispatcher_from_config(config).await;
    Ok(handle_event(dispatcher.as_ref(), &event.payload).await)
}

/// Turn a raw API Gateway / function URL event into the Slack reply.
pub async fn handle_event(dispatcher: &dyn Dispatcher, payload: &Value) -> Value {
    let body = match parsing::extract_body(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            return ok_ephemeral(INTAKE_FAILURE_MESSAGE);
        }
    };

    slash_handler::handle_slash_command(dispatcher, &body).await
}
