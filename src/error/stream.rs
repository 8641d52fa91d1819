//! Stream-level error types.
//!
//! Only conditions outside the line protocol end up here. Bad lines and
//! not-yet-complete fields are normal stream states and never become a
//! `StreamError`.

use thiserror::Error;

use super::category::ErrorCategory;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamError {
    /// The chunk source returned an error.
    #[error("Stream transport failed: {message}")]
    Transport { message: String },

    /// A field key could not be turned into a pattern.
    #[error("Invalid field key '{key}': {message}")]
    InvalidSchema { key: String, message: String },

    /// An environment override holds an unusable value.
    #[error("Invalid value '{value}' for {name}")]
    InvalidConfig { name: String, value: String },

    /// Reading the input failed.
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl StreamError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StreamError::Transport { .. } => ErrorCategory::Transport,
            StreamError::InvalidSchema { .. } | StreamError::InvalidConfig { .. } => {
                ErrorCategory::Configuration
            }
            StreamError::Io { .. } => ErrorCategory::System,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Transport { .. } => "E_STREAM_TRANSPORT",
            StreamError::InvalidSchema { .. } => "E_STREAM_SCHEMA",
            StreamError::InvalidConfig { .. } => "E_STREAM_CONFIG",
            StreamError::Io { .. } => "E_STREAM_IO",
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io {
            message: err.to_string(),
        }
    }
}
