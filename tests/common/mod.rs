//! In-memory fakes for the crate's external seams.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bedrock_ask::ai::{AnswerGenerator, GenerationPrompt};
use bedrock_ask::api::dispatch::Dispatcher;
use bedrock_ask::core::models::{AskRequest, SourceLocation};
use bedrock_ask::retrieval::{KnowledgeBase, KnowledgeBaseHit};
use bedrock_ask::worker::deliver::{DeliveryReceipt, Responder};
use bedrock_ask::RelayError;
use serde_json::Value;

#[derive(Default)]
pub struct RecordingDispatcher {
    pub dispatched: Mutex<Vec<AskRequest>>,
    pub fail_with: Option<String>,
}

impl RecordingDispatcher {
    pub fn failing(message: &str) -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn dispatched(&self) -> Vec<AskRequest> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: &AskRequest) -> Result<(), RelayError> {
        if let Some(message) = &self.fail_with {
            return Err(RelayError::DispatchError(message.clone()));
        }
        self.dispatched.lock().unwrap().push(request.clone());
        Ok(())
    }
}

pub struct FakeKnowledgeBase {
    result: Result<Vec<KnowledgeBaseHit>, String>,
    pub queries: Mutex<Vec<(String, usize)>>,
}

impl FakeKnowledgeBase {
    pub fn with_hits(hits: Vec<KnowledgeBaseHit>) -> Self {
        Self {
            result: Ok(hits),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl KnowledgeBase for FakeKnowledgeBase {
    async fn retrieve(
        &self,
        query: &str,
        result_count: usize,
    ) -> Result<Vec<KnowledgeBaseHit>, RelayError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), result_count));
        self.result
            .clone()
            .map_err(RelayError::RetrievalError)
    }
}

pub struct FakeGenerator {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<GenerationPrompt>>,
}

impl FakeGenerator {
    pub fn answering(answer: &str) -> Self {
        Self {
            reply: Ok(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl AnswerGenerator for FakeGenerator {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, RelayError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone().map_err(RelayError::GenerationError)
    }
}

/// Records every POST. Replies are taken from `scripted` in order, then 200.
#[derive(Default)]
pub struct RecordingResponder {
    pub posts: Mutex<Vec<(String, Value)>>,
    scripted: Mutex<VecDeque<Result<u16, String>>>,
}

impl RecordingResponder {
    pub fn scripted(replies: Vec<Result<u16, String>>) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            scripted: Mutex::new(replies.into()),
        }
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<DeliveryReceipt, RelayError> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        let reply = self.scripted.lock().unwrap().pop_front().unwrap_or(Ok(200));
        match reply {
            Ok(status) => Ok(DeliveryReceipt {
                status,
                body: if status == 200 { "ok".to_string() } else { "invalid_payload".to_string() },
            }),
            Err(message) => Err(RelayError::HttpError(message)),
        }
    }
}

pub fn hit(content: &str, uri: &str, score: Option<f64>) -> KnowledgeBaseHit {
    KnowledgeBaseHit {
        content: Some(content.to_string()),
        source: SourceLocation::S3 {
            uri: uri.to_string(),
        },
        score,
    }
}

pub fn request(question: &str) -> AskRequest {
    AskRequest {
        question: question.to_string(),
        response_url: "https://hooks.example/abc".to_string(),
        user_id: "U1".to_string(),
        correlation_id: "corr-1".to_string(),
    }
}

/// All `text` fields of the section blocks in an answer payload.
pub fn section_texts(payload: &Value) -> Vec<String> {
    payload["blocks"]
        .as_array()
        .map(|blocks| {
            blocks
                .iter()
                .filter(|b| b["type"] == "section")
                .filter_map(|b| b["text"]["text"].as_str().map(ToString::to_string))
                .collect()
        })
        .unwrap_or_default()
}
