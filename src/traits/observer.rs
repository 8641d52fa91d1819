//! Stream observer trait abstraction.
//!
//! Observers receive the caller-visible notifications a
//! [`ParserSession`](crate::sse::ParserSession) produces while it consumes
//! lines. Every method has a no-op default so an observer only implements
//! the notifications it cares about.

use crate::sse::StreamEvent;

/// Receiver of session notifications.
///
/// Methods are invoked synchronously from inside `process_message`, at most
/// one per processed line. Implementations must not block.
///
/// # Example
///
/// ```ignore
/// use routine_stream::traits::StreamObserver;
///
/// struct TitleLogger;
///
/// impl StreamObserver for TitleLogger {
///     fn on_complete(&mut self, content: &str, _thread_id: Option<&str>) {
///         println!("final document: {}", content);
///     }
/// }
/// ```
pub trait StreamObserver: Send {
    /// A thread id was announced by the backend.
    fn on_thread_created(&mut self, _thread_id: &str) {}

    /// A new fragment was appended to the accumulator. Receives only the
    /// fragment, never the whole accumulator.
    fn on_delta(&mut self, _fragment: &str) {}

    /// The backend sent the full final document.
    fn on_complete(&mut self, _content: &str, _thread_id: Option<&str>) {}

    /// The backend reported an error. The session keeps processing.
    fn on_error(&mut self, _message: &str) {}
}

/// Route one event to the matching observer method.
///
/// `Done` and `Invalid` carry no notification.
pub fn notify(observer: &mut dyn StreamObserver, event: &StreamEvent) {
    match event {
        StreamEvent::ThreadCreated { thread_id } => observer.on_thread_created(thread_id),
        StreamEvent::Delta { content } => observer.on_delta(content),
        StreamEvent::Completed { content, thread_id } => {
            observer.on_complete(content, thread_id.as_deref())
        }
        StreamEvent::Error { message } => observer.on_error(message),
        StreamEvent::Done | StreamEvent::Invalid => {}
    }
}
