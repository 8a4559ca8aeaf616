use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{error, info};
use url::Url;

use crate::core::models::AskRequest;
use crate::errors::RelayError;
use crate::slack::response_builder::{build_answer_payload, create_ephemeral_payload};

/// What the callback endpoint said about a POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

impl DeliveryReceipt {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts JSON payloads to a Slack `response_url`.
///
/// Transport failures are errors; any HTTP status, including non-2xx,
/// comes back as a receipt.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<DeliveryReceipt, RelayError>;
}

pub struct HttpResponder {
    client: HttpClient,
}

impl HttpResponder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
        }
    }
}

impl Default for HttpResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<DeliveryReceipt, RelayError> {
        let url = Url::parse(url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .client
            .post(url)
            .headers(headers)
            .json(payload)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        Ok(DeliveryReceipt { status, body })
    }
}

/// Host part of a callback URL, for logs. The path of a Slack
/// `response_url` acts as a credential and is never logged.
#[must_use]
pub fn callback_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
        .unwrap_or_else(|| "<invalid url>".to_string())
}

/// Post the answer message for `request`.
///
/// A non-2xx reply is logged and otherwise ignored. Transport errors are
/// returned to the caller.
pub async fn deliver_answer(
    responder: &dyn Responder,
    request: &AskRequest,
    answer: &str,
    references: Option<&str>,
) -> Result<(), RelayError> {
    let payload = build_answer_payload(&request.user_id, &request.question, answer, references);
    let receipt = responder.post_json(&request.response_url, &payload).await?;

    if receipt.is_success() {
        info!(
            "Delivered answer to {} (status={})",
            callback_host(&request.response_url),
            receipt.status
        );
    } else {
        error!(
            "response_url POST failed: status={} body={}",
            receipt.status, receipt.body
        );
    }
    Ok(())
}

/// Single best-effort ephemeral error post. Never fails; the outcome is
/// logged and `true` is returned only when the callback accepted it.
pub async fn deliver_error(responder: &dyn Responder, response_url: &str, message: &str) -> bool {
    let payload = create_ephemeral_payload(message);
    match responder.post_json(response_url, &payload).await {
        Ok(receipt) if receipt.is_success() => {
            info!(
                "Delivered error notice to {}",
                callback_host(response_url)
            );
            true
        }
        Ok(receipt) => {
            error!(
                "Error notice POST failed: status={} body={}",
                receipt.status, receipt.body
            );
            false
        }
        Err(e) => {
            error!(
                "Error notice could not be delivered to {}: {}",
                callback_host(response_url),
                e
            );
            false
        }
    }
}
