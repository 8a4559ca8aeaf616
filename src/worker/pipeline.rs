//! The worker's linear state machine.
//!
//! `Received → Retrieving → Generating → Formatting → Delivering → Done`,
//! with one error edge from any stage to `DeliveringError → Done`.

use tracing::{error, info};

use super::answer::{format_references, generate_answer};
use super::deliver::{Responder, deliver_answer, deliver_error};
use crate::ai::AnswerGenerator;
use crate::core::config::{DEFAULT_RESULT_COUNT, WorkerConfig};
use crate::core::models::AskRequest;
use crate::errors::RelayError;
use crate::retrieval::{KnowledgeBase, retrieve_passages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStage {
    Received,
    Retrieving,
    Generating,
    Formatting,
    Delivering,
    DeliveringError,
    Done,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// The answer payload was posted (whatever status the callback returned).
    Answered,
    /// A stage failed; an error notice was attempted.
    Failed {
        stage: WorkerStage,
        message: String,
        notice_delivered: bool,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct WorkerSettings {
    pub result_count: usize,
    pub show_references: bool,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            result_count: DEFAULT_RESULT_COUNT,
            show_references: false,
        }
    }
}

impl From<&WorkerConfig> for WorkerSettings {
    fn from(config: &WorkerConfig) -> Self {
        Self {
            result_count: config.result_count,
            show_references: config.show_references,
        }
    }
}

/// The ephemeral message posted when a run fails.
#[must_use]
pub fn processing_error_message(error: &RelayError) -> String {
    format!("Sorry, an error occurred during processing: {error}")
}

pub struct Worker<'a> {
    knowledge_base: &'a dyn KnowledgeBase,
    generator: &'a dyn AnswerGenerator,
    responder: &'a dyn Responder,
    settings: WorkerSettings,
}

impl<'a> Worker<'a> {
    #[must_use]
    pub fn new(
        knowledge_base: &'a dyn KnowledgeBase,
        generator: &'a dyn AnswerGenerator,
        responder: &'a dyn Responder,
        settings: WorkerSettings,
    ) -> Self {
        Self {
            knowledge_base,
            generator,
            responder,
            settings,
        }
    }

    /// Answer one request and post the result to its `response_url`.
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(correlation_id = %request.correlation_id, user_id = %request.user_id)
    )]
    pub async fn run(&self, request: &AskRequest) -> WorkerOutcome {
        let mut stage = WorkerStage::Received;

        match self.answer(request, &mut stage).await {
            Ok(()) => {
                advance(&mut stage, WorkerStage::Done);
                WorkerOutcome::Answered
            }
            Err(e) => {
                let failed_stage = stage;
                error!("Worker failed during {:?}: {}", failed_stage, e);
                advance(&mut stage, WorkerStage::DeliveringError);

                let message = processing_error_message(&e);
                let notice_delivered =
                    deliver_error(self.responder, &request.response_url, &message).await;

                advance(&mut stage, WorkerStage::Done);
                WorkerOutcome::Failed {
                    stage: failed_stage,
                    message,
                    notice_delivered,
                }
            }
        }
    }

    async fn answer(&self, request: &AskRequest, stage: &mut WorkerStage) -> Result<(), RelayError> {
        advance(stage, WorkerStage::Retrieving);
        let passages = retrieve_passages(
            self.knowledge_base,
            &request.question,
            self.settings.result_count,
        )
        .await?;

        advance(stage, WorkerStage::Generating);
        let answer = generate_answer(self.generator, &request.question, &passages).await;

        advance(stage, WorkerStage::Formatting);
        let references = format_references(&passages);

        advance(stage, WorkerStage::Delivering);
        let references = self
            .settings
            .show_references
            .then_some(references.as_str());
        deliver_answer(self.responder, request, &answer, references).await
    }
}

fn advance(stage: &mut WorkerStage, next: WorkerStage) {
    info!("Worker stage {:?} -> {:?}", *stage, next);
    *stage = next;
}
