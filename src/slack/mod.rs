//! All Slack-specific functionality

pub mod command_parser;
pub mod response_builder;

pub use command_parser::{SlackCommandEvent, parse_form_data};
