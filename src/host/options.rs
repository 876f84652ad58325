use serde::Deserialize;

/// Display knobs read from the host's option pane.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Pixel height of the raw-text fallback textarea.
    pub textarea_height: u16,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            textarea_height: 500,
        }
    }
}
