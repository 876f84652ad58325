use indexmap::IndexMap;

use crate::editor::gather::{Gathered, gather};
use crate::editor::{EDIT_ATTR, JSON_EDIT_ATTR, TEXT_FIELD};
use crate::host::notify::Notifier;
use crate::ui::element::Element;

/// A collector that can replace one named field after the base pass.
pub trait FieldOverride {
    /// Field this override produces.
    fn field(&self) -> &str;

    /// Marker attribute identifying regions this override owns. The override
    /// fires only when the marker's value names its field.
    fn marker_attr(&self) -> &str;

    fn gather(&self, region: &Element, notifier: &mut dyn Notifier) -> Gathered;
}

/// Two-step save pipeline the host composes at startup: its own field
/// collection always runs first, then registered overrides may replace
/// individual fields.
#[derive(Default)]
pub struct SavePipeline {
    overrides: Vec<Box<dyn FieldOverride>>,
}

impl SavePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field_override: Box<dyn FieldOverride>) {
        self.overrides.push(field_override);
    }

    /// Collects the fields to persist for the editor tree rooted at `root`.
    pub fn gather_save_fields(
        &self,
        root: &Element,
        fields: &mut IndexMap<String, String>,
        notifier: &mut dyn Notifier,
    ) {
        collect_edit_fields(root, fields);

        for field_override in &self.overrides {
            let marker = field_override.marker_attr();
            let field = field_override.field();
            let Some(region) = root.find(|el| el.attr(marker) == Some(field)) else {
                continue;
            };
            if let Gathered::Text(text) = field_override.gather(region, notifier) {
                fields.insert(field.to_string(), text);
            }
        }
    }
}

/// Base pass: every element tagged with the `edit` attribute contributes its
/// current text to the named field.
fn collect_edit_fields(root: &Element, fields: &mut IndexMap<String, String>) {
    root.visit(&mut |el| {
        if let Some(field) = el.attr(EDIT_ATTR) {
            fields.insert(field.to_string(), el.text.clone());
        }
    });
}

/// The JSON editor's registration for the `text` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEditOverride;

impl FieldOverride for JsonEditOverride {
    fn field(&self) -> &str {
        TEXT_FIELD
    }

    fn marker_attr(&self) -> &str {
        JSON_EDIT_ATTR
    }

    fn gather(&self, region: &Element, notifier: &mut dyn Notifier) -> Gathered {
        gather(region, notifier)
    }
}
