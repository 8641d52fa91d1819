//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`StreamObserver`] - Receives session notifications
//! - [`StreamDecoder`] - Stateful line decoding

pub mod observer;
pub mod sse;

pub use observer::{notify, StreamObserver};
pub use sse::StreamDecoder;
