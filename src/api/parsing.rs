use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::{
    RelayError,
    slack::command_parser::{SlackCommandEvent, parse_form_data},
};

/// Pull the raw form body out of an API Gateway or function URL event.
///
/// A missing or non-string body yields an empty string. Bodies flagged with
/// `isBase64Encoded` are decoded first; invalid UTF-8 in the decoded bytes
/// is replaced rather than rejected.
pub fn extract_body(payload: &Value) -> Result<String, RelayError> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Ok(String::new());
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| RelayError::ParseError(format!("Invalid base64 body: {e}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[must_use]
pub fn parse_slack_event(payload: &str) -> SlackCommandEvent {
    parse_form_data(payload)
}
