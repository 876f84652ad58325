use serde_json::Value;

use crate::host::options::DisplayOptions;
use crate::json;
use crate::kind::{self, WidgetKind};
use crate::ui::element::{Element, Tag};

use super::action::Action;
use super::{
    ADD_BUTTON_CLASS, DELETE_BUTTON_CLASS, EDIT_ATTR, ERROR_CLASS, FALLBACK_CLASS, FIELD_CLASS,
    JSON_EDIT_ATTR, KEY_FIELD_ATTR, KEY_INPUT_CLASS, TEXT_FIELD, VALUE_FIELD_ATTR,
    VALUE_INPUT_CLASS, WRAPPER_CLASS,
};

const LONG_TEXT_HEIGHT: u16 = 60;
const NESTED_JSON_HEIGHT: u16 = 100;
const NEW_FIELD_HEIGHT: u16 = 30;
const DEFAULT_KEY: &str = "newProperty";

const INVALID_DOCUMENT_NOTICE: &str = "Error: this tiddler's 'text' content does not contain \
     valid JSON (must be an object or array). Displaying as plain text. Please enter valid JSON \
     to use the GUI editor.";

/// Renders an editable view of `raw_text` into `place`.
///
/// Valid object/array documents get a JSON-edit region with one field row per
/// top-level key plus an "Add Property" button. Anything else falls back to a
/// raw textarea so the save path always has something to write back.
pub fn render_editor(place: &mut Element, raw_text: &str, opts: &DisplayOptions) {
    match json::try_parse_json(raw_text) {
        Some(doc) => render_document(place, &doc),
        None => render_fallback(place, raw_text, opts),
    }
}

fn render_fallback(place: &mut Element, raw_text: &str, opts: &DisplayOptions) {
    place.append(
        Element::new(Tag::Notice)
            .with_class(ERROR_CLASS)
            .with_text(INVALID_DOCUMENT_NOTICE),
    );

    // Tagged for the base collector so plain-text edits still reach the field.
    let mut area = Element::new(Tag::TextArea)
        .with_class(FALLBACK_CLASS)
        .with_text(raw_text)
        .with_attr(EDIT_ATTR, TEXT_FIELD);
    area.height = Some(opts.textarea_height);
    place.append(area);
}

fn render_document(place: &mut Element, doc: &Value) {
    let mut wrapper = Element::new(Tag::Div)
        .with_class(WRAPPER_CLASS)
        .with_attr(JSON_EDIT_ATTR, TEXT_FIELD);

    let mut add_row = Element::new(Tag::Div);
    add_row.append(
        Element::button("Add Property", "Add a new key-value pair", Action::AddProperty)
            .with_class(ADD_BUTTON_CLASS),
    );
    wrapper.append(add_row);

    match doc {
        Value::Object(map) => {
            for (key, value) in map {
                add_property_field(&mut wrapper, key, value, false);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                add_property_field(&mut wrapper, &index.to_string(), value, false);
            }
        }
        // try_parse_json only yields objects and arrays.
        _ => {}
    }

    place.append(wrapper);
}

/// Appends one key/value field row to `wrapper`.
///
/// Existing rows (`is_new == false`) get a read-only key and a value control
/// chosen by [`kind::classify`]; rows added during the session get an editable
/// key and an empty long-text control, since their eventual type is unknown.
pub fn add_property_field(wrapper: &mut Element, key: &str, value: &Value, is_new: bool) {
    let key = if key.is_empty() { DEFAULT_KEY } else { key };

    let mut row = Element::new(Tag::Div).with_class(FIELD_CLASS);
    let row_id = row.id();

    let mut label = Element::new(Tag::Label).with_text("Key:");
    let mut key_input = Element::new(Tag::TextInput)
        .with_class(KEY_INPUT_CLASS)
        .with_text(key)
        .with_attr(KEY_FIELD_ATTR, "true");
    key_input.read_only = !is_new;
    label.append(key_input);
    row.append(label);

    row.append(
        value_control(value, is_new)
            .with_class(VALUE_INPUT_CLASS)
            .with_attr(VALUE_FIELD_ATTR, "true"),
    );

    row.append(
        Element::button("X", "Remove this property", Action::RemoveField(row_id))
            .with_class(DELETE_BUTTON_CLASS),
    );

    wrapper.append(row);
}

fn value_control(value: &Value, is_new: bool) -> Element {
    if is_new {
        let mut area = Element::new(Tag::TextArea);
        area.height = Some(NEW_FIELD_HEIGHT);
        area.kind = Some(WidgetKind::LongText);
        return area;
    }

    let kind = kind::classify(value);
    let mut control = match kind {
        WidgetKind::Boolean => {
            let mut checkbox = Element::new(Tag::Checkbox);
            checkbox.checked = value.as_bool().unwrap_or(false);
            checkbox
        }
        WidgetKind::Number => Element::new(Tag::NumberInput).with_text(json::to_compact(value)),
        WidgetKind::Null => Element::new(Tag::TextInput).with_text("null"),
        WidgetKind::NestedJson => {
            let mut area = Element::new(Tag::TextArea).with_text(json::to_pretty(value));
            area.height = Some(NESTED_JSON_HEIGHT);
            area
        }
        WidgetKind::LongText => {
            let mut area =
                Element::new(Tag::TextArea).with_text(value.as_str().unwrap_or_default());
            area.height = Some(LONG_TEXT_HEIGHT);
            area
        }
        WidgetKind::ShortText => {
            Element::new(Tag::TextInput).with_text(value.as_str().unwrap_or_default())
        }
    };
    control.kind = Some(kind);
    control
}
