use bedrock_ask::api::handler;
use bedrock_ask::core::config::IntakeConfig;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    bedrock_ask::setup_logging();

    let config = IntakeConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let config = &config;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(config, event).await
    }))
    .await
}
