use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// The fields of a Slack slash command invocation that we care about.
///
/// Slack sends more (`token`, `trigger_id`, ...); those are ignored. Every
/// field defaults to an empty string when it is absent from the body.
#[derive(Debug, Default)]
pub struct SlackCommandEvent {
    pub team_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
}

/// Decodes a single `application/x-www-form-urlencoded` component.
///
/// `+` is turned into a space before percent-decoding, so an encoded
/// plus sign (`%2B`) survives as `+`. Bytes that are not valid UTF-8 become
/// U+FFFD.
///
/// # Examples
///
/// ```
/// use bedrock_ask::slack::command_parser::decode_url_component;
///
/// assert_eq!(decode_url_component("hello%20world"), "hello world");
/// assert_eq!(decode_url_component("hello+world"), "hello world");
/// assert_eq!(decode_url_component("1%2B1"), "1+1");
/// assert_eq!(decode_url_component("%FF"), "\u{FFFD}");
/// ```
#[must_use]
pub fn decode_url_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parses a slash command form body into a [`SlackCommandEvent`].
///
/// Never fails: missing keys become empty strings and undecodable bytes are
/// replaced.
///
/// # Examples
///
/// ```
/// use bedrock_ask::slack::command_parser::parse_form_data;
///
/// let event = parse_form_data(
///     "user_id=U1&command=%2Fask&text=What+is+X%3F&response_url=https%3A%2F%2Fhooks.example%2Fabc",
/// );
/// assert_eq!(event.command, "/ask");
/// assert_eq!(event.text, "What is X?");
/// assert_eq!(event.channel_id, "");
/// ```
#[must_use]
pub fn parse_form_data(form_data: &str) -> SlackCommandEvent {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        // First occurrence wins, like Slack's own form handling.
        map.entry(decode_url_component(raw_key))
            .or_insert_with(|| decode_url_component(raw_value));
    }

    let mut take = |key: &str| map.remove(key).unwrap_or_default();

    SlackCommandEvent {
        team_id: take("team_id"),
        channel_id: take("channel_id"),
        user_id: take("user_id"),
        user_name: take("user_name"),
        command: take("command"),
        text: take("text"),
        response_url: take("response_url"),
    }
}
