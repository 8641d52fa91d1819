//! Result type alias for stream operations.

use super::stream::StreamError;

/// Type alias for Results using StreamError.
pub type StreamResult<T> = Result<T, StreamError>;
