//! Stream event types and definitions
//!
//! Contains the StreamEvent enum with every event kind the assistant
//! stream can produce, plus the SessionState lifecycle enum.

use serde::Serialize;

/// Literal payload that terminates a stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Prefix every meaningful stream line starts with.
pub const DATA_PREFIX: &str = "data: ";

/// Typed events decoded from a single stream line.
///
/// Closed set: adding a new wire `type` means adding a variant here and
/// handling it at every dispatch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// The backend opened (or resumed) a thread for this turn
    ThreadCreated { thread_id: String },
    /// Fragment of the JSON document being streamed
    Delta { content: String },
    /// The full, final JSON document as text
    Completed {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thread_id: Option<String>,
    },
    /// Error reported by the upstream assistant
    Error { message: String },
    /// Terminal sentinel
    Done,
    /// Blank, comment, non-`data:` or unparsable line
    Invalid,
}

impl StreamEvent {
    /// Returns the event type name as a string for debugging purposes.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            StreamEvent::ThreadCreated { .. } => "thread_created",
            StreamEvent::Delta { .. } => "delta",
            StreamEvent::Completed { .. } => "completed",
            StreamEvent::Error { .. } => "error",
            StreamEvent::Done => "done",
            StreamEvent::Invalid => "invalid",
        }
    }
}

/// Lifecycle of a [`ParserSession`](crate::sse::ParserSession).
///
/// Transitions are one-way: `Streaming` moves to either `Done` or `Aborted`
/// and only `reset()` brings a session back to `Streaming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Streaming,
    /// `[DONE]` was observed
    Done,
    /// The caller (or the driver) gave up before `[DONE]`
    Aborted,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Streaming)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Streaming => "streaming",
            SessionState::Done => "done",
            SessionState::Aborted => "aborted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_event_type_name() {
        assert_eq!(
            StreamEvent::Delta {
                content: "".to_string(),
            }
            .event_type_name(),
            "delta"
        );
        assert_eq!(StreamEvent::Done.event_type_name(), "done");
        assert_eq!(StreamEvent::Invalid.event_type_name(), "invalid");
        assert_eq!(
            StreamEvent::ThreadCreated {
                thread_id: "t1".to_string(),
            }
            .event_type_name(),
            "thread_created"
        );
    }

    #[test]
    fn test_serialize_completed_without_thread() {
        let event = StreamEvent::Completed {
            content: "{}".to_string(),
            thread_id: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "completed");
        assert_eq!(json["content"], "{}");
        assert!(json.get("thread_id").is_none());
    }

    #[test]
    fn test_session_state_default_and_terminal() {
        assert_eq!(SessionState::default(), SessionState::Streaming);
        assert!(!SessionState::Streaming.is_terminal());
        assert!(SessionState::Done.is_terminal());
        assert!(SessionState::Aborted.is_terminal());
        assert_eq!(SessionState::Aborted.as_str(), "aborted");
    }
}
