//! Worker Lambda handler and request processing

pub mod answer;
pub mod deliver;
pub mod handler;
pub mod pipeline;

// Re-export the main handler for convenience
pub use handler::function_handler as handler;
pub use pipeline::{Worker, WorkerOutcome, WorkerSettings, WorkerStage};
