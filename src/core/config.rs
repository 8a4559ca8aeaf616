use std::env;

use crate::errors::RelayError;

/// Function name used when `WORKER_FUNCTION_NAME` is not set.
pub const DEFAULT_WORKER_FUNCTION_NAME: &str = "slack-async-processor";

/// Number of passages requested from the knowledge base by default.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Settings for the intake (slash command) Lambda.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub worker_function_name: String,
    /// When set, requests are sent to this SQS queue instead of invoking
    /// the worker function directly.
    pub processing_queue_url: Option<String>,
}

impl IntakeConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            worker_function_name: non_empty(lookup("WORKER_FUNCTION_NAME"))
                .unwrap_or_else(|| DEFAULT_WORKER_FUNCTION_NAME.to_string()),
            processing_queue_url: non_empty(lookup("PROCESSING_QUEUE_URL")),
        })
    }
}

/// Settings for the worker Lambda. Loaded once at process start.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub knowledge_base_id: String,
    pub region: String,
    pub model_id: String,
    pub result_count: usize,
    pub show_references: bool,
}

impl WorkerConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            non_empty(lookup(key))
                .ok_or_else(|| RelayError::ConfigError(format!("{key} is not set")))
        };

        let result_count = match non_empty(lookup("RETRIEVAL_RESULT_COUNT")) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(RelayError::ConfigError(format!(
                        "RETRIEVAL_RESULT_COUNT must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => DEFAULT_RESULT_COUNT,
        };

        let show_references = lookup("SHOW_REFERENCES")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            knowledge_base_id: required("KNOWLEDGE_BASE_ID")?,
            region: required("REGION_NAME")?,
            model_id: required("MODEL_ID")?,
            result_count,
            show_references,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
