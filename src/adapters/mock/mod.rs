//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`RecordingObserver`] - Observer that captures every notification

pub mod recording;

pub use recording::RecordingObserver;
