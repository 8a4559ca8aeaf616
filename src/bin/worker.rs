// Lambda bootstrap entry point for the Worker function

use bedrock_ask::core::config::WorkerConfig;
use bedrock_ask::worker::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    bedrock_ask::setup_logging();

    // Read once; every invocation borrows the same config.
    let config = WorkerConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let config = &config;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(config, event).await
    }))
    .await
}
