mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bedrock_ask::api::handler::handle_event;
use bedrock_ask::api::slash_handler::handle_slash_command;
use common::RecordingDispatcher;
use serde_json::{Value, json};

/// Decode the Slack payload carried in a Lambda proxy response.
fn slack_body(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body should be a string");
    serde_json::from_str(body).expect("body should be JSON")
}

const SLASH_BODY: &str = "token=abc&team_id=T1&channel_id=C1&user_id=U1&user_name=alice&\
                          command=%2Fask&text=What+is+X%3F&\
                          response_url=https%3A%2F%2Fhooks.example%2Fabc&trigger_id=1.2";

#[tokio::test]
async fn test_acknowledges_and_dispatches_once() {
    let dispatcher = RecordingDispatcher::default();

    let response = handle_slash_command(&dispatcher, SLASH_BODY).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["headers"]["Content-Type"], "application/json");
    assert_eq!(
        slack_body(&response),
        json!({
            "response_type": "in_channel",
            "text": "Processing <@U1>'s question... Please wait a moment."
        })
    );

    let dispatched = dispatcher.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].question, "What is X?");
    assert_eq!(dispatched[0].response_url, "https://hooks.example/abc");
    assert_eq!(dispatched[0].user_id, "U1");
    assert!(!dispatched[0].correlation_id.is_empty());
}

#[tokio::test]
async fn test_missing_fields_still_dispatch_with_empty_values() {
    let dispatcher = RecordingDispatcher::default();

    let response = handle_slash_command(&dispatcher, "").await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        slack_body(&response)["text"],
        "Processing <@>'s question... Please wait a moment."
    );
    let dispatched = dispatcher.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].question, "");
    assert_eq!(dispatched[0].response_url, "");
    assert_eq!(dispatched[0].user_id, "");
}

#[tokio::test]
async fn test_dispatch_failure_returns_ephemeral_apology() {
    let dispatcher = RecordingDispatcher::failing("throttled");

    let response = handle_slash_command(&dispatcher, SLASH_BODY).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        slack_body(&response),
        json!({
            "response_type": "ephemeral",
            "text": "Sorry, an error has occurred."
        })
    );
}

#[tokio::test]
async fn test_undecodable_field_is_replaced_not_rejected() {
    let dispatcher = RecordingDispatcher::default();

    // %FF is not valid UTF-8 once decoded; it lands in a field that is never forwarded.
    let response = handle_slash_command(
        &dispatcher,
        "user_name=%FF&user_id=U1&text=hi&response_url=https%3A%2F%2Fhooks.example%2Fabc",
    )
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(slack_body(&response)["response_type"], "in_channel");
    let dispatched = dispatcher.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].question, "hi");
    assert_eq!(dispatched[0].response_url, "https://hooks.example/abc");
}

#[tokio::test]
async fn test_undecodable_question_is_forwarded_with_replacement_char() {
    let dispatcher = RecordingDispatcher::default();

    let response = handle_slash_command(&dispatcher, "text=caf%E9&user_id=U1").await;

    assert_eq!(slack_body(&response)["response_type"], "in_channel");
    assert_eq!(dispatcher.dispatched()[0].question, "caf\u{FFFD}");
}

#[tokio::test]
async fn test_base64_body_with_invalid_utf8_is_still_dispatched() {
    let dispatcher = RecordingDispatcher::default();
    let mut raw = b"user_id=U1&text=hi&user_name=".to_vec();
    raw.push(0xFF);
    let event = json!({ "body": STANDARD.encode(raw), "isBase64Encoded": true });

    let response = handle_event(&dispatcher, &event).await;

    assert_eq!(slack_body(&response)["response_type"], "in_channel");
    assert_eq!(dispatcher.dispatched()[0].question, "hi");
}

#[tokio::test]
async fn test_event_with_plain_body() {
    let dispatcher = RecordingDispatcher::default();
    let event = json!({ "body": SLASH_BODY, "isBase64Encoded": false });

    let response = handle_event(&dispatcher, &event).await;

    assert_eq!(slack_body(&response)["response_type"], "in_channel");
    assert_eq!(dispatcher.dispatched()[0].question, "What is X?");
}

#[tokio::test]
async fn test_event_with_base64_body() {
    let dispatcher = RecordingDispatcher::default();
    let event = json!({ "body": STANDARD.encode(SLASH_BODY), "isBase64Encoded": true });

    let response = handle_event(&dispatcher, &event).await;

    assert_eq!(slack_body(&response)["response_type"], "in_channel");
    assert_eq!(dispatcher.dispatched()[0].user_id, "U1");
}

#[tokio::test]
async fn test_event_with_bad_base64_is_soft_error() {
    let dispatcher = RecordingDispatcher::default();
    let event = json!({ "body": "***not base64***", "isBase64Encoded": true });

    let response = handle_event(&dispatcher, &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(slack_body(&response)["response_type"], "ephemeral");
    assert!(dispatcher.dispatched().is_empty());
}

#[tokio::test]
async fn test_event_without_body_dispatches_empty_request() {
    let dispatcher = RecordingDispatcher::default();

    let response = handle_event(&dispatcher, &json!({})).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(dispatcher.dispatched().len(), 1);
}
