//! Recording observer for testing.
//!
//! Captures every notification so tests can assert on exactly what a
//! session emitted, even after the observer has been boxed and handed to
//! the session.

use std::sync::{Arc, Mutex};

use crate::sse::StreamEvent;
use crate::traits::StreamObserver;

/// Observer that records notifications into shared storage.
///
/// Clones share the same storage, so keep one clone for assertions and
/// subscribe the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<StreamEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded notification.
    pub fn events(&self) -> Vec<StreamEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of recorded notifications.
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear recorded notifications.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn record(&self, event: StreamEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl StreamObserver for RecordingObserver {
    fn on_thread_created(&mut self, thread_id: &str) {
        self.record(StreamEvent::ThreadCreated {
            thread_id: thread_id.to_string(),
        });
    }

    fn on_delta(&mut self, fragment: &str) {
        self.record(StreamEvent::Delta {
            content: fragment.to_string(),
        });
    }

    fn on_complete(&mut self, content: &str, thread_id: Option<&str>) {
        self.record(StreamEvent::Completed {
            content: content.to_string(),
            thread_id: thread_id.map(str::to_string),
        });
    }

    fn on_error(&mut self, message: &str) {
        self.record(StreamEvent::Error {
            message: message.to_string(),
        });
    }
}
