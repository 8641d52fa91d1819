//! Error category classification.
//!
//! High-level buckets that let callers decide whether to retry a stream,
//! fix their setup, or give up.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The byte source failed mid-stream.
    /// Generally transient; retrying belongs to the transport owner.
    Transport,

    /// Schema or environment settings are unusable.
    /// Not retryable until the configuration is corrected.
    Configuration,

    /// OS errors (reading a transcript file, stdin).
    System,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Transport)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
