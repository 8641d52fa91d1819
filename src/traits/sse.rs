//! Stream decoder trait abstraction.
//!
//! Provides a trait-based abstraction over the stateful line decoder,
//! enabling dependency injection and mocking in tests.

use crate::sse::{SessionState, StreamEvent};

/// Trait for stateful stream decoding.
///
/// The decoder consumes one protocol line per call, keeps the accumulated
/// delta text, and tracks whether the stream has reached a terminal state.
///
/// # Example
///
/// ```ignore
/// use routine_stream::traits::StreamDecoder;
///
/// fn feed_all<D: StreamDecoder>(decoder: &mut D, lines: &[&str]) {
///     for line in lines {
///         if decoder.is_terminal() {
///             break;
///         }
///         decoder.process_message(line);
///     }
/// }
/// ```
pub trait StreamDecoder: Send {
    /// Feed one line (without trailing newline).
    ///
    /// Returns the event that was acted upon, or `None` when the line was
    /// ignored or the decoder is already terminal.
    fn process_message(&mut self, line: &str) -> Option<StreamEvent>;

    /// Concatenation of every delta fragment seen so far.
    fn accumulated_content(&self) -> &str;

    /// Current lifecycle state.
    fn state(&self) -> SessionState;

    /// Stop accepting lines without having seen `[DONE]`.
    fn abort(&mut self);

    /// Clear accumulated state so the decoder can be reused.
    fn reset(&mut self);

    /// True once `[DONE]` has been processed.
    fn is_done(&self) -> bool {
        self.state() == SessionState::Done
    }

    /// True once no further lines will be processed.
    fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }
}

impl StreamDecoder for crate::sse::ParserSession {
    fn process_message(&mut self, line: &str) -> Option<StreamEvent> {
        crate::sse::ParserSession::process_message(self, line)
    }

    fn accumulated_content(&self) -> &str {
        crate::sse::ParserSession::accumulated_content(self)
    }

    fn state(&self) -> SessionState {
        crate::sse::ParserSession::state(self)
    }

    fn abort(&mut self) {
        crate::sse::ParserSession::abort(self)
    }

    fn reset(&mut self) {
        crate::sse::ParserSession::reset(self)
    }
}
