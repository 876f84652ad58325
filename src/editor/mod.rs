pub mod action;
pub mod gather;
pub mod render;

pub use action::{Action, dispatch};
pub use gather::{Gathered, gather};
pub use render::{add_property_field, render_editor};

/// Attribute marking a JSON-edit region with the name of the field it edits.
pub const JSON_EDIT_ATTR: &str = "jsonEdit";
/// Attribute the host's base collector reads: element text -> named field.
pub const EDIT_ATTR: &str = "edit";
/// The only field this editor targets.
pub const TEXT_FIELD: &str = "text";

/// Marker attribute on the key control inside a field row.
pub const KEY_FIELD_ATTR: &str = "data-json-key-field";
/// Marker attribute on the value control inside a field row.
pub const VALUE_FIELD_ATTR: &str = "data-json-value-field";

pub const WRAPPER_CLASS: &str = "json-editor-wrapper";
pub const FIELD_CLASS: &str = "json-editor-field";
pub const KEY_INPUT_CLASS: &str = "json-editor-key";
pub const VALUE_INPUT_CLASS: &str = "json-editor-value";
pub const FALLBACK_CLASS: &str = "json-editor-fallback";
pub const ERROR_CLASS: &str = "json-editor-error";
pub const ADD_BUTTON_CLASS: &str = "json-editor-add";
pub const DELETE_BUTTON_CLASS: &str = "json-editor-delete";
