//! Extraction result types

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Which field an extraction revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    Description,
    Step,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Description => "description",
            FieldKind::Step => "step",
        }
    }
}

/// A field pulled out of a partially received document.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedField {
    /// Raw text between the quotes; escape sequences are not decoded
    Title(String),
    Description(String),
    /// One element of the steps array, parsed as JSON
    Step { index: usize, value: Value },
}

impl ExtractedField {
    pub fn kind(&self) -> FieldKind {
        match self {
            ExtractedField::Title(_) => FieldKind::Title,
            ExtractedField::Description(_) => FieldKind::Description,
            ExtractedField::Step { .. } => FieldKind::Step,
        }
    }

    /// Position within the array for steps, `None` for scalar fields.
    pub fn index(&self) -> Option<usize> {
        match self {
            ExtractedField::Step { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The payload as a JSON value.
    pub fn data(&self) -> Value {
        match self {
            ExtractedField::Title(text) | ExtractedField::Description(text) => {
                Value::String(text.clone())
            }
            ExtractedField::Step { value, .. } => value.clone(),
        }
    }

    /// The text of a scalar field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExtractedField::Title(text) | ExtractedField::Description(text) => Some(text),
            ExtractedField::Step { .. } => None,
        }
    }
}

/// Outcome of one extraction attempt.
///
/// `field == None` means nothing new is complete yet; that is the normal
/// state while a document is still arriving, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub field: Option<ExtractedField>,
    /// Byte offset to pass as the cursor on the next call
    pub last_index: usize,
}

impl ExtractionResult {
    /// Nothing found; the cursor stays where it was.
    pub fn pending(cursor: usize) -> Self {
        Self {
            field: None,
            last_index: cursor,
        }
    }

    pub fn found(field: ExtractedField, last_index: usize) -> Self {
        Self {
            field: Some(field),
            last_index,
        }
    }

    pub fn parsed(&self) -> bool {
        self.field.is_some()
    }

    pub fn kind(&self) -> Option<FieldKind> {
        self.field.as_ref().map(ExtractedField::kind)
    }

    pub fn index(&self) -> Option<usize> {
        self.field.as_ref().and_then(ExtractedField::index)
    }

    pub fn data(&self) -> Option<Value> {
        self.field.as_ref().map(ExtractedField::data)
    }
}

/// Flat wire shape: `{parsed, type?, data?, index?, lastIndex}`
#[derive(Serialize)]
struct ResultShape {
    parsed: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<FieldKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(rename = "lastIndex")]
    last_index: usize,
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResultShape {
            parsed: self.parsed(),
            kind: self.kind(),
            data: self.data(),
            index: self.index(),
            last_index: self.last_index,
        }
        .serialize(serializer)
    }
}
