//! Single-line stream decoding
//!
//! Turns one raw protocol line into a [`StreamEvent`]. This layer never
//! fails: anything that is not a well-formed `data: ` line decodes to
//! [`StreamEvent::Invalid`].

use crate::sse::events::{StreamEvent, DATA_PREFIX, DONE_SENTINEL};
use crate::sse::payloads::WirePayload;

/// Parse a single stream line into a typed event.
///
/// - Lines without the exact `data: ` prefix (blank keep-alives, `:`
///   comments, `event:` fields) are `Invalid`.
/// - `data: [DONE]` is `Done`.
/// - Anything else after the prefix must be a JSON object whose `type`
///   names a known event; otherwise the line is `Invalid`.
pub fn parse_stream_line(line: &str) -> StreamEvent {
    // CRLF transports leave a trailing carriage return behind
    let line = line.strip_suffix('\r').unwrap_or(line);

    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return StreamEvent::Invalid;
    };

    if payload == DONE_SENTINEL {
        return StreamEvent::Done;
    }

    match serde_json::from_str::<WirePayload>(payload) {
        Ok(payload) => payload.into(),
        Err(e) => {
            tracing::debug!("Discarding undecodable stream line: {}", e);
            StreamEvent::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_stream_line(""), StreamEvent::Invalid);
    }

    #[test]
    fn test_parse_comment_line() {
        assert_eq!(parse_stream_line(": keep-alive"), StreamEvent::Invalid);
        assert_eq!(parse_stream_line(":"), StreamEvent::Invalid);
    }

    #[test]
    fn test_parse_requires_exact_prefix() {
        // No space after the colon
        assert_eq!(
            parse_stream_line(r#"data:{"type":"delta","content":"x"}"#),
            StreamEvent::Invalid
        );
        assert_eq!(
            parse_stream_line(r#"event: delta"#),
            StreamEvent::Invalid
        );
    }

    #[test]
    fn test_parse_done_sentinel() {
        assert_eq!(parse_stream_line("data: [DONE]"), StreamEvent::Done);
        assert_eq!(parse_stream_line("data: [DONE]\r"), StreamEvent::Done);
        assert_eq!(parse_stream_line("data: [DONE] "), StreamEvent::Invalid);
    }

    #[test]
    fn test_parse_thread_created() {
        assert_eq!(
            parse_stream_line(r#"data: {"type":"thread_created","threadId":"t1"}"#),
            StreamEvent::ThreadCreated {
                thread_id: "t1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_delta_keeps_fragment_verbatim() {
        let line = r#"data: {"type":"delta","content":"{\"routineTitle\": \"Mor"}"#;
        assert_eq!(
            parse_stream_line(line),
            StreamEvent::Delta {
                content: r#"{"routineTitle": "Mor"#.to_string()
            }
        );
    }

    #[test]
    fn test_parse_completed_with_thread() {
        let line = r#"data: {"type":"completed","content":"{}","threadId":"t9"}"#;
        assert_eq!(
            parse_stream_line(line),
            StreamEvent::Completed {
                content: "{}".to_string(),
                thread_id: Some("t9".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_error_event() {
        assert_eq!(
            parse_stream_line(r#"data: {"type":"error","error":"Assistant run failed"}"#),
            StreamEvent::Error {
                message: "Assistant run failed".to_string()
            }
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        assert_eq!(parse_stream_line("data: not json"), StreamEvent::Invalid);
        assert_eq!(
            parse_stream_line(r#"data: {"type":"delta","content":"unterminated"#),
            StreamEvent::Invalid
        );
    }

    #[test]
    fn test_parse_unknown_type_is_invalid() {
        assert_eq!(
            parse_stream_line(r#"data: {"type":"ping"}"#),
            StreamEvent::Invalid
        );
    }
}
