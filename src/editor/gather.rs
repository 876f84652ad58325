use serde_json::{Map, Value};

use crate::host::notify::Notifier;
use crate::json;
use crate::kind::{self, WidgetKind, WidgetState};
use crate::ui::element::Element;
use crate::warning::Warning;

use super::{FALLBACK_CLASS, FIELD_CLASS, JSON_EDIT_ATTR, KEY_FIELD_ATTR, VALUE_FIELD_ATTR};

/// Outcome of collecting an editor region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gathered {
    /// Replacement text for the edited field.
    Text(String),
    /// Nothing to gather; the host must leave the field untouched.
    Nothing,
}

/// Reconstructs the edited field's text from current widget state.
///
/// A JSON-edit region yields compact JSON built from its field rows; an
/// unmarked element containing the raw fallback textarea yields that text
/// verbatim. Every problem along the way is a non-fatal [`Warning`]; the
/// collector always returns something savable.
pub fn gather(element: &Element, notifier: &mut dyn Notifier) -> Gathered {
    if element.attr(JSON_EDIT_ATTR).is_some() {
        return gather_region(element, notifier);
    }
    match element.find(|el| el.has_class(FALLBACK_CLASS)) {
        Some(area) => Gathered::Text(area.text.clone()),
        None => Gathered::Nothing,
    }
}

fn gather_region(region: &Element, notifier: &mut dyn Notifier) -> Gathered {
    let mut data: Map<String, Value> = Map::new();
    let mut any_invalid = false;

    for row in field_rows(region) {
        let Some(key_input) = row.find(|el| el.attr(KEY_FIELD_ATTR).is_some()) else {
            continue;
        };
        let Some(value_input) = row.find(|el| el.attr(VALUE_FIELD_ATTR).is_some()) else {
            continue;
        };
        let Some(widget_kind) = value_input.kind else {
            continue;
        };

        let key = key_input.text.trim();
        if key.is_empty() {
            continue;
        }

        let parsed = kind::parse(
            widget_kind,
            WidgetState {
                text: &value_input.text,
                checked: value_input.checked,
            },
        );
        if parsed.fallback {
            any_invalid = true;
            let warning = match widget_kind {
                WidgetKind::NestedJson => Warning::InvalidNestedJson(key.to_string()),
                _ => Warning::InvalidNumber(key.to_string()),
            };
            log::warn!("{warning}");
            notifier.message(&warning.to_string());
        }

        if data.contains_key(key) {
            let warning = Warning::DuplicateKey(key.to_string());
            log::warn!("{warning}");
            notifier.message(&warning.to_string());
            continue;
        }
        data.insert(key.to_string(), parsed.value);
    }

    if any_invalid {
        notifier.message(&Warning::SomeValuesInvalid.to_string());
    }

    Gathered::Text(json::to_compact(&Value::Object(data)))
}

/// Field rows below `region` in document order. Each rendered field
/// corresponds to exactly one row, so every present field is visited once.
fn field_rows(region: &Element) -> Vec<&Element> {
    let mut rows = Vec::new();
    region.visit(&mut |el| {
        if el.has_class(FIELD_CLASS) {
            rows.push(el);
        }
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::{Gathered, gather};
    use crate::editor::action::{Action, dispatch};
    use crate::editor::render::{add_property_field, render_editor};
    use crate::editor::{FIELD_CLASS, JSON_EDIT_ATTR, KEY_FIELD_ATTR, VALUE_FIELD_ATTR};
    use crate::host::notify::Recorder;
    use crate::host::options::DisplayOptions;
    use crate::ui::element::{Element, Tag};
    use crate::warning::Warning;
    use serde_json::{Value, json};

    fn rendered(raw: &str) -> Element {
        let mut place = Element::new(Tag::Div);
        render_editor(&mut place, raw, &DisplayOptions::default());
        place
    }

    fn gathered_value(place: &Element, recorder: &mut Recorder) -> Value {
        let region = place
            .find(|el| el.attr(JSON_EDIT_ATTR).is_some())
            .expect("JSON-edit region");
        let Gathered::Text(out) = gather(region, recorder) else {
            panic!("region should gather to text");
        };
        serde_json::from_str(&out).expect("gathered text should be valid JSON")
    }

    fn set_value_text(place: &mut Element, key: &str, text: &str) {
        let row = place
            .find_mut(|el| {
                el.has_class(FIELD_CLASS)
                    && el
                        .find(|c| c.attr(KEY_FIELD_ATTR).is_some() && c.text.trim() == key)
                        .is_some()
            })
            .expect("row for key");
        let control = row
            .find_mut(|el| el.attr(VALUE_FIELD_ATTR).is_some())
            .expect("value control");
        control.text = text.to_string();
    }

    #[test]
    fn unedited_round_trip_preserves_every_pair_and_type() {
        let source = r#"{"name":"ted","age":42,"score":4.5,"admin":true,"nick":null,"tags":["a","b"],"profile":{"deep":{"x":1}}}"#;
        let place = rendered(source);
        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, serde_json::from_str::<Value>(source).unwrap());
        assert!(recorder.messages.is_empty());
    }

    #[test]
    fn long_strings_round_trip_through_the_textarea() {
        let long = "a".repeat(80);
        let source = json!({"body": long, "multi": "two\nlines"}).to_string();
        let place = rendered(&source);
        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, serde_json::from_str::<Value>(&source).unwrap());
    }

    #[test]
    fn booleans_gather_back_identically() {
        let place = rendered("{\"on\": true, \"off\": false}");
        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"on": true, "off": false}));
    }

    #[test]
    fn array_documents_gather_as_index_keyed_objects() {
        let place = rendered("[10, \"b\"]");
        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"0": 10, "1": "b"}));
    }

    #[test]
    fn invalid_number_text_gathers_as_string_with_warning() {
        let mut place = rendered("{\"n\": 1}");
        set_value_text(&mut place, "n", "abc");

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"n": "abc"}));
        assert!(
            recorder
                .messages
                .contains(&Warning::InvalidNumber("n".into()).to_string())
        );
        assert!(
            recorder
                .messages
                .contains(&Warning::SomeValuesInvalid.to_string())
        );
    }

    #[test]
    fn invalid_nested_text_gathers_as_string_with_warning() {
        let mut place = rendered("{\"sub\": {\"a\": 1}}");
        set_value_text(&mut place, "sub", "{broken");

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"sub": "{broken"}));
        assert!(
            recorder
                .messages
                .contains(&Warning::InvalidNestedJson("sub".into()).to_string())
        );
    }

    #[test]
    fn emptied_nested_text_gathers_as_null() {
        let mut place = rendered("{\"sub\": [1]}");
        set_value_text(&mut place, "sub", "");

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"sub": null}));
        assert!(recorder.messages.is_empty());
    }

    #[test]
    fn null_widget_edited_to_text_gathers_as_string() {
        let mut place = rendered("{\"gone\": null}");
        set_value_text(&mut place, "gone", "back again");

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"gone": "back again"}));
    }

    #[test]
    fn duplicate_keys_keep_the_first_value_and_warn() {
        let mut place = rendered("{\"x\": 1}");
        let wrapper = place
            .find_mut(|el| el.attr(JSON_EDIT_ATTR).is_some())
            .expect("wrapper");
        add_property_field(wrapper, "x", &json!(2), false);

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"x": 1}));
        assert_eq!(
            recorder.messages,
            vec![Warning::DuplicateKey("x".into()).to_string()]
        );
    }

    #[test]
    fn rows_with_empty_trimmed_keys_are_skipped() {
        let mut place = rendered("{\"kept\": 1}");
        dispatch(&mut place, Action::AddProperty);
        let new_key = place
            .find_mut(|el| el.attr(KEY_FIELD_ATTR).is_some() && !el.read_only)
            .expect("new key control");
        new_key.text = "   ".to_string();

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"kept": 1}));
    }

    #[test]
    fn added_rows_gather_with_their_typed_key_and_text() {
        let mut place = rendered("{\"a\": 1}");
        dispatch(&mut place, Action::AddProperty);
        {
            let new_key = place
                .find_mut(|el| el.attr(KEY_FIELD_ATTR).is_some() && !el.read_only)
                .expect("new key control");
            new_key.text = " added ".to_string();
        }
        set_value_text(&mut place, "added", "hello");

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"a": 1, "added": "hello"}));
    }

    #[test]
    fn deleted_rows_are_absent_from_the_result() {
        let mut place = rendered("{\"keep\": 1, \"drop\": 2}");
        let row_id = place
            .find(|el| {
                el.has_class(FIELD_CLASS)
                    && el
                        .find(|c| c.attr(KEY_FIELD_ATTR).is_some() && c.text == "drop")
                        .is_some()
            })
            .expect("row to delete")
            .id();
        dispatch(&mut place, Action::RemoveField(row_id));

        let mut recorder = Recorder::default();
        let round = gathered_value(&place, &mut recorder);
        assert_eq!(round, json!({"keep": 1}));
    }

    #[test]
    fn fallback_textarea_gathers_verbatim() {
        let mut place = rendered("not json at all");
        let area = place
            .find_mut(|el| el.has_class(crate::editor::FALLBACK_CLASS))
            .expect("fallback area");
        area.text.push_str(" (edited)");

        let mut recorder = Recorder::default();
        assert_eq!(
            gather(&place, &mut recorder),
            Gathered::Text("not json at all (edited)".to_string())
        );
    }

    #[test]
    fn unmarked_element_without_fallback_gathers_nothing() {
        let plain = Element::new(Tag::Div);
        let mut recorder = Recorder::default();
        assert_eq!(gather(&plain, &mut recorder), Gathered::Nothing);
    }
}
