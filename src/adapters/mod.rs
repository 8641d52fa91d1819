//! Concrete observer implementations.
//!
//! - [`CallbackObserver`] - Registerable closures, one per notification
//! - [`ChannelObserver`] - Forwards notifications into a tokio channel
//! - [`mock::RecordingObserver`] - Captures notifications for tests

pub mod callbacks;
pub mod channel;
pub mod mock;

pub use callbacks::CallbackObserver;
pub use channel::ChannelObserver;
pub use mock::RecordingObserver;
