use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to dispatch request to worker: {0}")]
    DispatchError(String),

    #[error("Failed to query knowledge base: {0}")]
    RetrievalError(String),

    #[error("Failed to generate answer: {0}")]
    GenerationError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::ParseError(error.to_string())
    }
}

impl From<url::ParseError> for RelayError {
    fn from(error: url::ParseError) -> Self {
        RelayError::HttpError(format!("invalid callback URL: {error}"))
    }
}
