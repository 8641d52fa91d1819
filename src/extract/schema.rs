//! Field schema for incremental extraction
//!
//! Names the three top-level keys the extractor looks for and builds the
//! shallow patterns that match them.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE_KEY: &str = "routineTitle";
pub const DEFAULT_DESCRIPTION_KEY: &str = "routineDescription";
pub const DEFAULT_STEPS_KEY: &str = "steps";

/// Keys of the fields revealed while a document streams in, in priority
/// order: title, description, steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSchema {
    /// Scalar string field reported as `title`
    pub title_key: String,
    /// Scalar string field reported as `description`
    pub description_key: String,
    /// Array-of-objects field whose first element is reported as `step`
    pub steps_key: String,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            title_key: DEFAULT_TITLE_KEY.to_string(),
            description_key: DEFAULT_DESCRIPTION_KEY.to_string(),
            steps_key: DEFAULT_STEPS_KEY.to_string(),
        }
    }
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
        self.title_key = key.into();
        self
    }

    pub fn with_description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }

    pub fn with_steps_key(mut self, key: impl Into<String>) -> Self {
        self.steps_key = key.into();
        self
    }
}

/// `"<key>": "<value>"` with a closing quote required.
///
/// `[^"]*` stops at the first quote, escaped or not, so a value holding
/// `\"` is cut short.
pub(crate) fn scalar_pattern(key: &str) -> String {
    format!(r#""{}"\s*:\s*"([^"]*)""#, regex::escape(key))
}

/// `"<key>": [ ... ]` up to the first closing bracket.
pub(crate) fn array_pattern(key: &str) -> String {
    format!(r#"(?s)"{}"\s*:\s*\[(.*?)\]"#, regex::escape(key))
}
