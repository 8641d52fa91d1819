//! Channel-backed observer.
//!
//! Forwards every notification as a [`StreamEvent`] into a tokio mpsc
//! channel so a consumer on another task can react to a stream without
//! sharing the session.

use tokio::sync::mpsc;

use crate::sse::StreamEvent;
use crate::traits::StreamObserver;

/// Observer that re-emits notifications into an unbounded channel.
///
/// Sending never blocks. Once the receiver is dropped notifications are
/// discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<StreamEvent>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::UnboundedSender<StreamEvent>) -> Self {
        Self { tx }
    }

    /// Create an observer together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StreamEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn forward(&self, event: StreamEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Stream event receiver dropped, discarding notification");
        }
    }
}

impl StreamObserver for ChannelObserver {
    fn on_thread_created(&mut self, thread_id: &str) {
        self.forward(StreamEvent::ThreadCreated {
            thread_id: thread_id.to_string(),
        });
    }

    fn on_delta(&mut self, fragment: &str) {
        self.forward(StreamEvent::Delta {
            content: fragment.to_string(),
        });
    }

    fn on_complete(&mut self, content: &str, thread_id: Option<&str>) {
        self.forward(StreamEvent::Completed {
            content: content.to_string(),
            thread_id: thread_id.map(str::to_string),
        });
    }

    fn on_error(&mut self, message: &str) {
        self.forward(StreamEvent::Error {
            message: message.to_string(),
        });
    }
}
