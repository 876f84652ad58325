use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One wiki content unit: a title, its text body, and named metadata fields.
/// The editor only ever reads and replaces `text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tiddler {
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl Tiddler {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            fields: IndexMap::new(),
        }
    }
}
