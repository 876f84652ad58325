use serde_json::{Number, Value};

use crate::json;

/// Longest string still edited in a single-line control.
const SHORT_TEXT_MAX: usize = 50;

/// Classification of a field's value, picked once at render time. The kind
/// decides both the control that is rendered and how `parse` reads the
/// control's state back at gather time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Checkbox control.
    Boolean,
    /// Numeric input.
    Number,
    /// Text input pre-filled with the literal `null`.
    Null,
    /// Textarea holding pretty-printed JSON of a nested object or array.
    NestedJson,
    /// Multi-line textarea, also used for rows added during the session.
    LongText,
    /// Single-line text input.
    ShortText,
}

/// Picks the editing control for `value`. Inverse of `parse`: each kind's
/// round-trip policy lives in exactly these two functions.
pub fn classify(value: &Value) -> WidgetKind {
    match value {
        Value::String(s) if s.chars().count() > SHORT_TEXT_MAX || s.contains('\n') => {
            WidgetKind::LongText
        }
        Value::Bool(_) => WidgetKind::Boolean,
        Value::Number(_) => WidgetKind::Number,
        Value::Null => WidgetKind::Null,
        Value::Object(_) | Value::Array(_) => WidgetKind::NestedJson,
        Value::String(_) => WidgetKind::ShortText,
    }
}

/// Current state of a rendered value control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState<'a> {
    pub text: &'a str,
    pub checked: bool,
}

/// Result of mapping widget state back to a JSON value. `fallback` is set
/// when the text could not be read per the widget kind and was kept as a
/// plain string instead; the collector turns that into a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: Value,
    pub fallback: bool,
}

impl Parsed {
    fn ok(value: Value) -> Self {
        Self {
            value,
            fallback: false,
        }
    }

    fn kept_as_string(raw: &str, fallback: bool) -> Self {
        Self {
            value: Value::String(raw.to_string()),
            fallback,
        }
    }
}

/// Converts current widget state back to a JSON value, per kind.
pub fn parse(kind: WidgetKind, state: WidgetState<'_>) -> Parsed {
    match kind {
        WidgetKind::Boolean => Parsed::ok(Value::Bool(state.checked)),
        WidgetKind::Number => match state.text.trim().parse::<Number>() {
            Ok(number) => Parsed::ok(Value::Number(number)),
            // Empty number fields gather as "" without counting as invalid.
            Err(_) => Parsed::kept_as_string(state.text, !state.text.is_empty()),
        },
        WidgetKind::Null => {
            if state.text.eq_ignore_ascii_case("null") {
                Parsed::ok(Value::Null)
            } else {
                // Lets the user turn a former null field into free text.
                Parsed::kept_as_string(state.text, false)
            }
        }
        WidgetKind::NestedJson => match json::try_parse_json(state.text) {
            Some(value) => Parsed::ok(value),
            None if state.text.is_empty() => Parsed::ok(Value::Null),
            None => Parsed::kept_as_string(state.text, true),
        },
        WidgetKind::LongText | WidgetKind::ShortText => Parsed::kept_as_string(state.text, false),
    }
}
