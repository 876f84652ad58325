pub mod editor;
pub mod host;
pub mod json;
pub mod kind;
pub mod ui;
pub mod warning;

pub use editor::action::{Action, dispatch};
pub use editor::gather::{Gathered, gather};
pub use editor::render::{add_property_field, render_editor};

pub use host::command::{Command, JsonEditCommand};
pub use host::notify::{Notifier, SilentNotifier};
pub use host::options::DisplayOptions;
pub use host::save::{FieldOverride, JsonEditOverride, SavePipeline};
pub use host::tiddler::Tiddler;

pub use json::try_parse_json;
pub use kind::{Parsed, WidgetKind, WidgetState, classify, parse};
pub use ui::element::{Element, ElementId, Tag};
pub use warning::Warning;
