//! Bedrock Ask - a Slack slash command that answers questions from an
//! Amazon Bedrock knowledge base.
//!
//! This crate implements a two-Lambda architecture:
//! 1. An API Lambda that receives the slash command, dispatches the question
//!    asynchronously and acknowledges Slack immediately
//! 2. A Worker Lambda that retrieves passages from the knowledge base,
//!    generates an answer with a Bedrock model and posts it to the
//!    command's `response_url`
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Lambda async invoke (or SQS) between the two functions
//! - Bedrock Knowledge Bases `Retrieve` for semantic search
//! - Bedrock Runtime `Converse` for answer generation
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use bedrock_ask::core::config::WorkerConfig;
//! use bedrock_ask::core::models::AskRequest;
//! use bedrock_ask::worker::deliver::HttpResponder;
//! use bedrock_ask::worker::{Worker, WorkerSettings};
//! use bedrock_ask::{BedrockConverseClient, BedrockKnowledgeBase};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     bedrock_ask::setup_logging();
//!
//!     let config = WorkerConfig {
//!         knowledge_base_id: "KB12345678".to_string(),
//!         region: "us-east-1".to_string(),
//!         model_id: "anthropic.claude-3-haiku-20240307-v1:0".to_string(),
//!         result_count: 10,
//!         show_references: false,
//!     };
//!     let sdk_config = aws_config::load_from_env().await;
//!     let knowledge_base = BedrockKnowledgeBase::new(&sdk_config, config.knowledge_base_id.clone());
//!     let generator = BedrockConverseClient::new(&sdk_config, config.model_id.clone());
//!     let responder = HttpResponder::new();
//!
//!     let worker = Worker::new(&knowledge_base, &generator, &responder, WorkerSettings::from(&config));
//!     let outcome = worker
//!         .run(&AskRequest {
//!             question: "What is our refund policy?".into(),
//!             response_url: "https://hooks.slack.com/commands/T1/1/abc".into(),
//!             user_id: "U123".into(),
//!             correlation_id: "demo".into(),
//!         })
//!         .await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod retrieval;
pub mod slack;
pub mod worker;

pub use ai::{AnswerGenerator, BedrockConverseClient};
pub use errors::RelayError;
pub use retrieval::{BedrockKnowledgeBase, KnowledgeBase};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output is JSON for `CloudWatch` Logs, filtered by `RUST_LOG` (default
/// `info`). Calling it more than once is harmless; later calls are ignored.
///
/// # Example
///
/// ```
/// bedrock_ask::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
