//! Response-related utilities for Slack interactions.
//!
//! This module provides standardized ways to create and format
//! the payloads sent back to Slack, both as the slash command's
//! synchronous reply and as later `response_url` posts.

use serde_json::{Value, json};

/// Slack rejects `section` blocks whose text exceeds this many characters.
pub const SECTION_TEXT_LIMIT: usize = 3000;

/// Create a JSON payload for an ephemeral response
///
/// Ephemeral messages are only visible to the user who triggered the command.
///
/// # Examples
///
/// ```
/// use bedrock_ask::slack::response_builder::create_ephemeral_payload;
///
/// let payload = create_ephemeral_payload("This message is only visible to you");
/// assert_eq!(payload["response_type"], "ephemeral");
/// ```
#[must_use]
pub fn create_ephemeral_payload(text: &str) -> Value {
    json!({
        "text": text,
        "response_type": "ephemeral"
    })
}

/// Create a JSON payload for a plain-text message visible to the whole channel.
#[must_use]
pub fn create_in_channel_payload(text: &str) -> Value {
    json!({
        "text": text,
        "response_type": "in_channel"
    })
}

#[must_use]
pub fn mrkdwn_section(text: &str) -> Value {
    json!({
        "type": "section",
        "text": { "type": "mrkdwn", "text": text }
    })
}

#[must_use]
pub fn divider() -> Value {
    json!({ "type": "divider" })
}

/// Split `text` into pieces of at most `limit` characters.
///
/// Always returns at least one piece, so an empty input yields `[""]`.
#[must_use]
pub fn split_section_text(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(limit)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Truncate `text` to at most `limit` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_section_text(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Build the block message that carries a generated answer.
///
/// Layout: the asker's question as a quote, the answer (split over as many
/// sections as the Slack limit requires), a divider, and optionally the
/// rendered reference list.
#[must_use]
pub fn build_answer_payload(
    user_id: &str,
    question: &str,
    answer: &str,
    references: Option<&str>,
) -> Value {
    let question_text = format!("*<@{user_id}>'s Question:*\n>{question}");
    let mut blocks = vec![mrkdwn_section(&truncate_section_text(
        &question_text,
        SECTION_TEXT_LIMIT,
    ))];

    let answer_text = format!("*Answer:*\n{answer}");
    blocks.extend(
        split_section_text(&answer_text, SECTION_TEXT_LIMIT)
            .iter()
            .map(|part| mrkdwn_section(part)),
    );

    blocks.push(divider());

    if let Some(refs) = references.filter(|r| !r.trim().is_empty()) {
        blocks.push(mrkdwn_section(&truncate_section_text(
            refs.trim_end(),
            SECTION_TEXT_LIMIT,
        )));
    }

    json!({
        "response_type": "in_channel",
        "blocks": blocks
    })
}
