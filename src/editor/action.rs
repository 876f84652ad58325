use serde_json::Value;

use crate::ui::element::{Element, ElementId};

use super::JSON_EDIT_ATTR;
use super::render::add_property_field;

/// What a button inside the editor does when activated. The host captures the
/// action at creation time and hands it back through [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a blank field row with an editable key.
    AddProperty,
    /// Remove one field row. Pure UI state: the key simply stops existing as
    /// far as the collector is concerned.
    RemoveField(ElementId),
}

/// Applies one button action to the tree rooted at `root`. New rows land in
/// the JSON-edit wrapper wherever it sits below `root`.
pub fn dispatch(root: &mut Element, action: Action) {
    match action {
        Action::AddProperty => {
            if let Some(wrapper) = root.find_mut(|el| el.attr(JSON_EDIT_ATTR).is_some()) {
                add_property_field(wrapper, "", &Value::String(String::new()), true);
            }
        }
        Action::RemoveField(id) => {
            root.remove_descendant(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, dispatch};
    use crate::editor::render::render_editor;
    use crate::editor::{FIELD_CLASS, JSON_EDIT_ATTR, KEY_FIELD_ATTR};
    use crate::host::options::DisplayOptions;
    use crate::ui::element::{Element, Tag};

    fn row_count(root: &Element) -> usize {
        let mut count = 0;
        root.visit(&mut |el| {
            if el.has_class(FIELD_CLASS) {
                count += 1;
            }
        });
        count
    }

    #[test]
    fn add_property_appends_a_new_editable_row_to_the_wrapper() {
        let mut place = Element::new(Tag::Div);
        render_editor(&mut place, "{\"a\": 1}", &DisplayOptions::default());
        assert_eq!(row_count(&place), 1);

        dispatch(&mut place, Action::AddProperty);
        assert_eq!(row_count(&place), 2);

        let wrapper = place
            .find(|el| el.attr(JSON_EDIT_ATTR).is_some())
            .expect("wrapper");
        let new_key = wrapper
            .children()
            .last()
            .and_then(|row| row.find(|el| el.attr(KEY_FIELD_ATTR).is_some()))
            .expect("new row should carry a key control");
        assert!(!new_key.read_only);
    }

    #[test]
    fn remove_field_drops_the_row() {
        let mut place = Element::new(Tag::Div);
        render_editor(&mut place, "{\"a\": 1, \"b\": 2}", &DisplayOptions::default());

        let row_id = place
            .find(|el| el.has_class(FIELD_CLASS))
            .expect("at least one row")
            .id();
        dispatch(&mut place, Action::RemoveField(row_id));
        assert_eq!(row_count(&place), 1);
    }
}
