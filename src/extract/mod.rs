//! Incremental JSON field extraction
//!
//! While an assistant streams a JSON document, the UI wants to show the
//! routine title, description and first step as soon as each one is
//! complete. The extractor does a shallow pattern scan over the text
//! received so far instead of parsing the whole (still invalid) document.
//!
//! It is a pure function of `(text, cursor)`. The cursor is a byte offset
//! owned by the caller; a field is only eligible when its match starts
//! strictly after the cursor, which is what keeps a field from being
//! reported twice.
//!
//! Known limitations of the shallow scan:
//! - a scalar value containing an escaped quote (`\"`) is cut at that quote
//! - only the first element of the steps array is reported
//! - the steps match ends at the first `]`, so a step holding a nested
//!   array or a string containing `]` is reported as not ready, even once
//!   the document is complete
//!
//! # Module structure
//! - `schema` - Field keys and pattern construction (FieldSchema)
//! - `result` - Result types (ExtractionResult, ExtractedField, FieldKind)
//! - `reveal` - Caller-side cursor owner (ProgressiveReveal)

mod result;
mod reveal;
mod schema;

pub use result::{ExtractedField, ExtractionResult, FieldKind};
pub use reveal::ProgressiveReveal;
pub use schema::{FieldSchema, DEFAULT_DESCRIPTION_KEY, DEFAULT_STEPS_KEY, DEFAULT_TITLE_KEY};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{StreamError, StreamResult};
use schema::{array_pattern, scalar_pattern};

static DEFAULT_EXTRACTOR: Lazy<FieldExtractor> = Lazy::new(|| {
    FieldExtractor::new(&FieldSchema::default()).expect("Invalid default field patterns")
});

/// Extract the next field using the default schema.
pub fn extract_next_field(text: &str, cursor: usize) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract_next(text, cursor)
}

/// Compiled patterns for one [`FieldSchema`].
///
/// Holds no per-stream state, so one extractor can serve any number of
/// streams as long as each keeps its own cursor.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    title: Regex,
    description: Regex,
    steps: Regex,
}

impl FieldExtractor {
    pub fn new(schema: &FieldSchema) -> StreamResult<Self> {
        Ok(Self {
            title: compile(&schema.title_key, scalar_pattern(&schema.title_key))?,
            description: compile(
                &schema.description_key,
                scalar_pattern(&schema.description_key),
            )?,
            steps: compile(&schema.steps_key, array_pattern(&schema.steps_key))?,
        })
    }

    /// Attempt to pull exactly one new field out of `text`.
    ///
    /// Priority is title, then description, then the first step, but a
    /// field whose match starts at or before `cursor` is skipped before
    /// priority applies. Returns [`ExtractionResult::pending`] with the
    /// unchanged cursor when nothing new is complete.
    pub fn extract_next(&self, text: &str, cursor: usize) -> ExtractionResult {
        if let Some(result) = scalar_field(&self.title, text, cursor, ExtractedField::Title) {
            return result;
        }
        if let Some(result) =
            scalar_field(&self.description, text, cursor, ExtractedField::Description)
        {
            return result;
        }
        if let Some(result) = self.first_step(text, cursor) {
            return result;
        }
        ExtractionResult::pending(cursor)
    }

    fn first_step(&self, text: &str, cursor: usize) -> Option<ExtractionResult> {
        let caps = self.steps.captures(text)?;
        let whole = caps.get(0)?;
        if whole.start() <= cursor {
            return None;
        }

        let body = caps.get(1)?.as_str();
        let items: Vec<Value> = match serde_json::from_str(&format!("[{}]", body)) {
            Ok(items) => items,
            Err(e) => {
                // Usually a nested array closed the match early
                tracing::trace!("Steps array not ready: {}", e);
                return None;
            }
        };

        let first = items.into_iter().next()?;
        Some(ExtractionResult::found(
            ExtractedField::Step {
                index: 0,
                value: first,
            },
            whole.end(),
        ))
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

fn compile(key: &str, pattern: String) -> StreamResult<Regex> {
    Regex::new(&pattern).map_err(|e| StreamError::InvalidSchema {
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn scalar_field(
    pattern: &Regex,
    text: &str,
    cursor: usize,
    make: fn(String) -> ExtractedField,
) -> Option<ExtractionResult> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    if whole.start() <= cursor {
        return None;
    }
    let value = caps.get(1)?.as_str().to_string();
    Some(ExtractionResult::found(make(value), whole.end()))
}
