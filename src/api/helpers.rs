//! Lambda proxy response builders for the intake handler.
//!
//! Slack treats any non-200 reply to a slash command as a broken command,
//! so every builder here answers 200 and only the Slack payload varies.

use serde_json::{Value, json};

use crate::slack::response_builder::{create_ephemeral_payload, create_in_channel_payload};

/// Shown to the whole channel while the worker runs.
#[must_use]
pub fn processing_message(user_id: &str) -> String {
    format!("Processing <@{user_id}>'s question... Please wait a moment.")
}

/// Shown only to the requester when intake itself fails.
pub const INTAKE_FAILURE_MESSAGE: &str = "Sorry, an error has occurred.";

/// Wraps a Slack payload in a 200 OK Lambda proxy response.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response with a message visible to the channel.
#[must_use]
pub fn ok_in_channel(text: &str) -> Value {
    ok_json(&create_in_channel_payload(text))
}

/// Returns a 200 OK response with an ephemeral Slack message.
#[must_use]
pub fn ok_ephemeral(text: &str) -> Value {
    ok_json(&create_ephemeral_payload(text))
}
