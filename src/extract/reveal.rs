//! Caller-side cursor bookkeeping
//!
//! The extractor is stateless; `ProgressiveReveal` is the piece a consumer
//! keeps per stream to remember how far extraction has got.

use super::{ExtractionResult, FieldExtractor};

/// Owns the extraction cursor for one stream.
///
/// # Example
///
/// ```ignore
/// use routine_stream::extract::ProgressiveReveal;
///
/// let mut reveal = ProgressiveReveal::default();
/// session.process_message(line);
/// for field in reveal.poll(session.accumulated_content()) {
///     show(field);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgressiveReveal {
    extractor: FieldExtractor,
    cursor: usize,
    revealed: usize,
}

impl ProgressiveReveal {
    pub fn new(extractor: FieldExtractor) -> Self {
        Self {
            extractor,
            cursor: 0,
            revealed: 0,
        }
    }

    /// Run the extractor until it has nothing new and return every field
    /// revealed by this call, in the order the extractor offered them.
    ///
    /// `text` must be the whole accumulated document so far; call
    /// [`reset`](Self::reset) when the accumulator starts over.
    pub fn poll(&mut self, text: &str) -> Vec<ExtractionResult> {
        let mut found = Vec::new();
        loop {
            let result = self.extractor.extract_next(text, self.cursor);
            if !result.parsed() || result.last_index <= self.cursor {
                break;
            }
            tracing::debug!(
                kind = result.kind().map(|k| k.as_str()).unwrap_or("none"),
                last_index = result.last_index,
                "Revealed streamed field"
            );
            self.cursor = result.last_index;
            found.push(result);
        }
        self.revealed += found.len();
        found
    }

    /// Current cursor (byte offset into the accumulated text).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Fields revealed since creation or the last reset.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.revealed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ExtractedField, FieldKind};
    use serde_json::json;

    #[test]
    fn test_poll_reveals_fields_as_text_grows() {
        let mut reveal = ProgressiveReveal::default();

        assert!(reveal.poll(r#"{"routineTitle": "Mor"#).is_empty());

        let found = reveal.poll(r#"{"routineTitle": "Morning", "routineDescr"#);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].field,
            Some(ExtractedField::Title("Morning".to_string()))
        );

        let text = r#"{"routineTitle": "Morning", "routineDescription": "Slow", "steps": [{"title": "Tea"}]}"#;
        let found = reveal.poll(text);
        let kinds: Vec<_> = found.iter().filter_map(|r| r.kind()).collect();
        assert_eq!(kinds, vec![FieldKind::Description, FieldKind::Step]);
        assert_eq!(found[1].data(), Some(json!({"title": "Tea"})));

        assert!(reveal.poll(text).is_empty());
        assert_eq!(reveal.revealed_count(), 3);
    }

    #[test]
    fn test_poll_never_repeats_for_same_text() {
        let text = r#"{"routineTitle":"A","routineDescription":"B","steps":[{"x":1},{"x":2}]}"#;
        let mut reveal = ProgressiveReveal::default();
        let first = reveal.poll(text);
        assert_eq!(first.len(), 3);
        assert!(reveal.poll(text).is_empty());
        assert_eq!(reveal.cursor(), first[2].last_index);
    }

    #[test]
    fn test_reset_rewinds_cursor() {
        let text = r#"{"routineTitle":"A"}"#;
        let mut reveal = ProgressiveReveal::default();
        assert_eq!(reveal.poll(text).len(), 1);
        reveal.reset();
        assert_eq!(reveal.cursor(), 0);
        assert_eq!(reveal.poll(text).len(), 1);
    }
}
