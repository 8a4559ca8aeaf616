use std::collections::HashMap;

use bedrock_ask::RelayError;
use bedrock_ask::core::config::{
    DEFAULT_RESULT_COUNT, DEFAULT_WORKER_FUNCTION_NAME, IntakeConfig, WorkerConfig,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const WORKER_VARS: &[(&str, &str)] = &[
    ("KNOWLEDGE_BASE_ID", "KB123"),
    ("REGION_NAME", "us-west-2"),
    ("MODEL_ID", "anthropic.claude-3-haiku-20240307-v1:0"),
];

#[test]
fn test_intake_defaults() {
    let config = IntakeConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.worker_function_name, DEFAULT_WORKER_FUNCTION_NAME);
    assert!(config.processing_queue_url.is_none());
}

#[test]
fn test_intake_overrides() {
    let config = IntakeConfig::from_lookup(lookup(&[
        ("WORKER_FUNCTION_NAME", "ask-worker"),
        ("PROCESSING_QUEUE_URL", "https://sqs.us-east-1.amazonaws.com/1/q"),
    ]))
    .unwrap();
    assert_eq!(config.worker_function_name, "ask-worker");
    assert_eq!(
        config.processing_queue_url.as_deref(),
        Some("https://sqs.us-east-1.amazonaws.com/1/q")
    );
}

#[test]
fn test_intake_blank_queue_url_is_ignored() {
    let config = IntakeConfig::from_lookup(lookup(&[("PROCESSING_QUEUE_URL", "  ")])).unwrap();
    assert!(config.processing_queue_url.is_none());
}

#[test]
fn test_worker_required_values() {
    let config = WorkerConfig::from_lookup(lookup(WORKER_VARS)).unwrap();
    assert_eq!(config.knowledge_base_id, "KB123");
    assert_eq!(config.region, "us-west-2");
    assert_eq!(config.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
    assert_eq!(config.result_count, DEFAULT_RESULT_COUNT);
    assert!(!config.show_references);
}

#[test]
fn test_worker_missing_value_is_config_error() {
    let err = WorkerConfig::from_lookup(lookup(&[("KNOWLEDGE_BASE_ID", "KB123")])).unwrap_err();
    match err {
        RelayError::ConfigError(msg) => assert!(msg.contains("REGION_NAME")),
        other => panic!("Unexpected error type: {other}"),
    }
}

#[test]
fn test_worker_optional_values() {
    let mut vars = WORKER_VARS.to_vec();
    vars.push(("RETRIEVAL_RESULT_COUNT", "5"));
    vars.push(("SHOW_REFERENCES", "TRUE"));

    let config = WorkerConfig::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.result_count, 5);
    assert!(config.show_references);
}

#[test]
fn test_worker_rejects_bad_result_count() {
    for bad in ["0", "-3", "ten"] {
        let mut vars = WORKER_VARS.to_vec();
        vars.push(("RETRIEVAL_RESULT_COUNT", bad));
        assert!(
            matches!(
                WorkerConfig::from_lookup(lookup(&vars)),
                Err(RelayError::ConfigError(_))
            ),
            "{bad} should be rejected"
        );
    }
}
