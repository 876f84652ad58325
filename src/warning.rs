use std::fmt;

/// Non-fatal problems surfaced while gathering. Nothing here blocks a save;
/// every variant still leaves the collector with savable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A second row trimmed to an already-seen key; only the first is kept.
    DuplicateKey(String),
    /// A number control held text that is not a number; saved as a string.
    InvalidNumber(String),
    /// A nested-JSON control held unparseable text; saved as a plain string.
    InvalidNestedJson(String),
    /// Summary emitted once per gather when any field fell back.
    SomeValuesInvalid,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(
                f,
                "Warning: Duplicate key '{key}' found. Only the first instance will be saved."
            ),
            Self::InvalidNumber(key) => write!(
                f,
                "Warning: Value for '{key}' is not a valid number. Saving as string."
            ),
            Self::InvalidNestedJson(key) => write!(
                f,
                "Warning: Value for '{key}' is not valid JSON. Saving as plain string."
            ),
            Self::SomeValuesInvalid => {
                write!(f, "Some values were not valid. Please check the JSON editor.")
            }
        }
    }
}
