use crate::editor::render::render_editor;
use crate::host::notify::Notifier;
use crate::host::options::DisplayOptions;
use crate::host::tiddler::Tiddler;
use crate::ui::element::{Element, Tag};

/// One entry in the host's toolbar command registry.
pub trait Command {
    fn text(&self) -> &str;

    fn tooltip(&self) -> &str;

    /// Label shown when the wiki is in read-only mode.
    fn read_only_text(&self) -> &str;

    fn read_only_tooltip(&self) -> &str;

    /// Activation handler: builds the editor view for `tiddler`.
    fn handler(
        &self,
        tiddler: &Tiddler,
        opts: &DisplayOptions,
        notifier: &mut dyn Notifier,
    ) -> Element;
}

/// Toolbar command that opens the JSON editor on a tiddler's text field.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEditCommand;

impl Command for JsonEditCommand {
    fn text(&self) -> &str {
        "edit JSON"
    }

    fn tooltip(&self) -> &str {
        "Edit this tiddler's content as JSON in a GUI"
    }

    fn read_only_text(&self) -> &str {
        "view JSON"
    }

    fn read_only_tooltip(&self) -> &str {
        "View the JSON source of this tiddler"
    }

    fn handler(
        &self,
        tiddler: &Tiddler,
        opts: &DisplayOptions,
        notifier: &mut dyn Notifier,
    ) -> Element {
        notifier.clear();
        let mut place = Element::new(Tag::Div);
        render_editor(&mut place, &tiddler.text, opts);
        place
    }
}
