use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::editor::action::Action;
use crate::kind::WidgetKind;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one element, stable for the lifetime of the editor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Label,
    Notice,
    TextInput,
    TextArea,
    NumberInput,
    Checkbox,
    Button,
}

/// One node in the transient UI tree the host displays.
///
/// Stands in for the host's element-creation primitive: a tagged node with an
/// optional class, string attributes, and the control state the collector
/// reads back (text, checked, read-only). Buttons carry the [`Action`] they
/// fire on activation instead of a callback; the host hands that action back
/// to [`crate::editor::action::dispatch`].
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    pub tag: Tag,
    pub class: String,
    attrs: HashMap<String, String>,
    pub text: String,
    pub checked: bool,
    pub read_only: bool,
    /// Pixel height hint for textareas.
    pub height: Option<u16>,
    pub tooltip: String,
    pub action: Option<Action>,
    /// Set on value controls so the collector knows how to parse them.
    pub kind: Option<WidgetKind>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: ElementId::next(),
            tag,
            class: String::new(),
            attrs: HashMap::new(),
            text: String::new(),
            checked: false,
            read_only: false,
            height: None,
            tooltip: String::new(),
            action: None,
            kind: None,
            children: Vec::new(),
        }
    }

    /// Activatable control with a label, tooltip, and the action it fires.
    pub fn button(label: impl Into<String>, tooltip: impl Into<String>, action: Action) -> Self {
        let mut button = Self::new(Tag::Button);
        button.text = label.into();
        button.tooltip = tooltip.into();
        button.action = Some(action);
        button
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    pub fn append(&mut self, child: Element) -> ElementId {
        let id = child.id;
        self.children.push(child);
        id
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first preorder walk over this element and its subtree.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// First element (self included, preorder) matching `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    pub fn find_mut(&mut self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(pred))
    }

    pub fn find_by_id(&self, id: ElementId) -> Option<&Element> {
        self.find(|el| el.id == id)
    }

    /// Removes the descendant with `id` from wherever it sits in the subtree.
    /// Returns false when no such descendant exists.
    pub fn remove_descendant(&mut self, id: ElementId) -> bool {
        if let Some(pos) = self.children.iter().position(|child| child.id == id) {
            self.children.remove(pos);
            return true;
        }
        self.children
            .iter_mut()
            .any(|child| child.remove_descendant(id))
    }
}
