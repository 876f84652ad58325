use serde_json::Value;

/// Parses `raw` as JSON, accepting only object or array documents.
///
/// Returns `None` for empty input, malformed JSON, and JSON that decodes to a
/// primitive (a bare number, string, boolean, or `null` literal). Used both
/// for the whole tiddler text and for a single field edited as nested JSON.
pub fn try_parse_json(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        _ => None,
    }
}

/// Compact serialization, used when writing the gathered document back.
pub fn to_compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Indented serialization, used to display nested values inside a textarea.
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
