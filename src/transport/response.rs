use serde_json::Value;

use crate::domain::RawResult;

/// Keys searched, in order, for the reply text of an AI chat response.
const REPLY_KEYS: [&str; 6] = ["reply", "response", "answer", "content", "text", "message"];

const UNKNOWN_ERROR: &str = "Unknown error";

/// Decode a successful response body.
///
/// Non-JSON bodies are kept as a JSON string and an empty body becomes `null`,
/// so decoding never fails.
pub fn decode_raw(body: &str) -> RawResult {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

/// Pick the human-readable message out of an error response body.
pub fn decode_api_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("message") {
            Some(Value::String(message)) => return message.clone(),
            Some(Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or(UNKNOWN_ERROR)
        .to_owned()
}

/// Text form of a payload: strings as-is, anything else as compact JSON.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extract the AI reply from a chat response, falling back to the whole payload.
pub fn decode_reply_text(raw: &RawResult) -> String {
    let data = raw.get("data");
    if let Some(Value::String(text)) = data {
        return text.clone();
    }

    data.and_then(find_reply)
        .or_else(|| find_reply(raw))
        .map(render_text)
        .unwrap_or_else(|| render_text(raw))
}

fn find_reply(value: &Value) -> Option<&Value> {
    let map = value.as_object()?;
    REPLY_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}
