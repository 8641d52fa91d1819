//! Closure-backed observer.
//!
//! Holds one optional closure per notification kind. Registering a closure
//! replaces whatever was registered before for that kind.

use std::fmt;

use crate::traits::StreamObserver;

type TextCallback = Box<dyn FnMut(&str) + Send>;
type CompleteCallback = Box<dyn FnMut(&str, Option<&str>) + Send>;

/// Observer whose notifications are plain closures.
///
/// # Example
///
/// ```ignore
/// use routine_stream::adapters::CallbackObserver;
///
/// let mut callbacks = CallbackObserver::new();
/// callbacks.set_on_delta(|fragment| print!("{}", fragment));
/// ```
#[derive(Default)]
pub struct CallbackObserver {
    thread_created: Option<TextCallback>,
    delta: Option<TextCallback>,
    complete: Option<CompleteCallback>,
    error: Option<TextCallback>,
}

impl CallbackObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_thread_created<F>(&mut self, f: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.thread_created = Some(Box::new(f));
    }

    pub fn set_on_delta<F>(&mut self, f: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.delta = Some(Box::new(f));
    }

    pub fn set_on_complete<F>(&mut self, f: F)
    where
        F: FnMut(&str, Option<&str>) + Send + 'static,
    {
        self.complete = Some(Box::new(f));
    }

    pub fn set_on_error<F>(&mut self, f: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.error = Some(Box::new(f));
    }

    /// Drop every registered closure.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no closure is registered.
    pub fn is_empty(&self) -> bool {
        self.thread_created.is_none()
            && self.delta.is_none()
            && self.complete.is_none()
            && self.error.is_none()
    }
}

impl StreamObserver for CallbackObserver {
    fn on_thread_created(&mut self, thread_id: &str) {
        if let Some(f) = self.thread_created.as_mut() {
            f(thread_id);
        }
    }

    fn on_delta(&mut self, fragment: &str) {
        if let Some(f) = self.delta.as_mut() {
            f(fragment);
        }
    }

    fn on_complete(&mut self, content: &str, thread_id: Option<&str>) {
        if let Some(f) = self.complete.as_mut() {
            f(content, thread_id);
        }
    }

    fn on_error(&mut self, message: &str) {
        if let Some(f) = self.error.as_mut() {
            f(message);
        }
    }
}

impl fmt::Debug for CallbackObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackObserver")
            .field("thread_created", &self.thread_created.is_some())
            .field("delta", &self.delta.is_some())
            .field("complete", &self.complete.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_new_observer_is_empty() {
        let callbacks = CallbackObserver::new();
        assert!(callbacks.is_empty());
    }

    #[test]
    fn test_registered_closure_fires() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut callbacks = CallbackObserver::new();
        callbacks.set_on_delta(move |fragment| sink.lock().unwrap().push(fragment.to_string()));

        callbacks.on_delta("hello");
        callbacks.on_delta(" world");
        // Not registered, must not panic
        callbacks.on_error("ignored");

        assert_eq!(*seen.lock().unwrap(), vec!["hello", " world"]);
    }

    #[test]
    fn test_registration_replaces_previous_closure() {
        let first = Arc::new(Mutex::new(0));
        let second = Arc::new(Mutex::new(0));

        let mut callbacks = CallbackObserver::new();
        let f = Arc::clone(&first);
        callbacks.set_on_thread_created(move |_| *f.lock().unwrap() += 1);
        let s = Arc::clone(&second);
        callbacks.set_on_thread_created(move |_| *s.lock().unwrap() += 1);

        callbacks.on_thread_created("t1");

        assert_eq!(*first.lock().unwrap(), 0);
        assert_eq!(*second.lock().unwrap(), 1);
    }

    #[test]
    fn test_clear_drops_closures() {
        let mut callbacks = CallbackObserver::new();
        callbacks.set_on_complete(|_, _| {});
        assert!(!callbacks.is_empty());
        callbacks.clear();
        assert!(callbacks.is_empty());
    }
}
