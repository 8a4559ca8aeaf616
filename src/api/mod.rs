//! API Lambda handler and request processing

pub mod dispatch;
pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod slash_handler;

// Re-export the main handler for convenience
pub use handler::function_handler as handler;
