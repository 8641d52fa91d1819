//! Stateful stream session
//!
//! A [`ParserSession`] is created per logical stream (one assistant turn),
//! fed one line at a time, and dispatches each decoded event to the
//! registered callbacks and observers. It owns the delta accumulator and
//! the terminal flag and nothing else.

use std::fmt;

use crate::adapters::CallbackObserver;
use crate::sse::events::{SessionState, StreamEvent};
use crate::sse::parser::parse_stream_line;
use crate::traits::{notify, StreamObserver};

/// Decoder state for one stream.
///
/// Not internally synchronized: one session per stream, one writer.
///
/// # Example
///
/// ```ignore
/// use routine_stream::sse::ParserSession;
///
/// let mut session = ParserSession::new();
/// session.on_complete(|content, _thread_id| println!("{}", content));
///
/// for line in body.lines() {
///     session.process_message(line);
/// }
/// assert!(session.is_done());
/// ```
#[derive(Default)]
pub struct ParserSession {
    /// Every delta fragment, in arrival order
    accumulated: String,
    state: SessionState,
    /// Closures registered through the `on_*` methods
    callbacks: CallbackObserver,
    /// Observers attached through `subscribe`
    observers: Vec<Box<dyn StreamObserver>>,
}

impl ParserSession {
    /// Create a new session in the streaming state
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the thread-created callback, replacing any previous one.
    pub fn on_thread_created<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.callbacks.set_on_thread_created(f);
        self
    }

    /// Register the delta callback. It receives only the new fragment.
    pub fn on_delta<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.callbacks.set_on_delta(f);
        self
    }

    /// Register the completion callback.
    pub fn on_complete<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&str, Option<&str>) + Send + 'static,
    {
        self.callbacks.set_on_complete(f);
        self
    }

    /// Register the error callback.
    pub fn on_error<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.callbacks.set_on_error(f);
        self
    }

    /// Attach an additional observer. Observers are notified after the
    /// registered callbacks, in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn StreamObserver>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Feed one raw line.
    ///
    /// Returns the event that was acted upon; `None` when the line was
    /// ignored or the session is already terminal.
    pub fn process_message(&mut self, line: &str) -> Option<StreamEvent> {
        if self.state.is_terminal() {
            tracing::trace!("Session is {}, ignoring line", self.state.as_str());
            return None;
        }
        self.process_event(parse_stream_line(line))
    }

    /// Apply an already decoded event.
    ///
    /// Same contract as [`process_message`](Self::process_message).
    pub fn process_event(&mut self, event: StreamEvent) -> Option<StreamEvent> {
        if self.state.is_terminal() {
            return None;
        }

        match &event {
            StreamEvent::Invalid => return None,
            StreamEvent::Delta { content } => self.accumulated.push_str(content),
            StreamEvent::Done => {
                tracing::debug!(
                    accumulated_len = self.accumulated.len(),
                    "Stream session finished"
                );
                self.state = SessionState::Done;
            }
            StreamEvent::Error { message } => {
                tracing::debug!("Upstream reported error: {}", message);
            }
            StreamEvent::ThreadCreated { .. } | StreamEvent::Completed { .. } => {}
        }

        self.dispatch(&event);
        Some(event)
    }

    fn dispatch(&mut self, event: &StreamEvent) {
        notify(&mut self.callbacks, event);
        for observer in self.observers.iter_mut() {
            notify(observer.as_mut(), event);
        }
    }

    /// Concatenation of every delta fragment seen so far.
    pub fn accumulated_content(&self) -> &str {
        &self.accumulated
    }

    /// True once `[DONE]` has been processed.
    pub fn is_done(&self) -> bool {
        self.state == SessionState::Done
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Stop processing without a `[DONE]` sentinel.
    ///
    /// Afterwards every `process_message` call is a no-op. Has no effect on
    /// a session that is already terminal.
    pub fn abort(&mut self) {
        if self.state == SessionState::Streaming {
            tracing::debug!(
                accumulated_len = self.accumulated.len(),
                "Stream session aborted"
            );
            self.state = SessionState::Aborted;
        }
    }

    /// Clear the accumulator and return to the streaming state so the
    /// session can serve another turn. Callbacks and observers are kept.
    pub fn reset(&mut self) {
        self.accumulated.clear();
        self.state = SessionState::Streaming;
    }
}

impl fmt::Debug for ParserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserSession")
            .field("accumulated_len", &self.accumulated.len())
            .field("state", &self.state)
            .field("callbacks", &self.callbacks)
            .field("observers", &self.observers.len())
            .finish()
    }
}
