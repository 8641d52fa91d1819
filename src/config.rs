//! Stream consumer configuration.
//!
//! Defaults match the routine documents the assistant produces. Every
//! setting can be overridden from the environment:
//!
//! | Variable | Setting |
//! |----------|---------|
//! | `ROUTINE_STREAM_TITLE_FIELD` | title key |
//! | `ROUTINE_STREAM_DESCRIPTION_FIELD` | description key |
//! | `ROUTINE_STREAM_STEPS_FIELD` | steps key |
//! | `ROUTINE_STREAM_REVEAL` | `1`/`0`, progressive reveal on deltas |
//! | `ROUTINE_STREAM_LOG` | tracing filter directive |

use crate::error::{StreamError, StreamResult};
use crate::extract::{FieldExtractor, FieldSchema};

pub const ENV_TITLE_FIELD: &str = "ROUTINE_STREAM_TITLE_FIELD";
pub const ENV_DESCRIPTION_FIELD: &str = "ROUTINE_STREAM_DESCRIPTION_FIELD";
pub const ENV_STEPS_FIELD: &str = "ROUTINE_STREAM_STEPS_FIELD";
pub const ENV_REVEAL: &str = "ROUTINE_STREAM_REVEAL";
pub const ENV_LOG: &str = "ROUTINE_STREAM_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for consuming a stream.
///
/// # Example
///
/// ```ignore
/// use routine_stream::config::StreamConfig;
///
/// let config = StreamConfig::default()
///     .with_reveal_on_delta(false)
///     .with_log_filter("routine_stream=debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Keys the extractor looks for
    pub schema: FieldSchema,
    /// Run field extraction after every delta (default: true)
    pub reveal_on_delta: bool,
    /// `tracing_subscriber::EnvFilter` directive (default: "warn")
    pub log_filter: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            schema: FieldSchema::default(),
            reveal_on_delta: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: FieldSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_reveal_on_delta(mut self, reveal: bool) -> Self {
        self.reveal_on_delta = reveal;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> StreamResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> StreamResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get(ENV_TITLE_FIELD) {
            config.schema.title_key = key;
        }
        if let Some(key) = get(ENV_DESCRIPTION_FIELD) {
            config.schema.description_key = key;
        }
        if let Some(key) = get(ENV_STEPS_FIELD) {
            config.schema.steps_key = key;
        }
        if let Some(value) = get(ENV_REVEAL) {
            config.reveal_on_delta = parse_flag(ENV_REVEAL, &value)?;
        }
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Compile the extractor for this configuration's schema.
    pub fn extractor(&self) -> StreamResult<FieldExtractor> {
        FieldExtractor::new(&self.schema)
    }
}

fn parse_flag(name: &str, value: &str) -> StreamResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(StreamError::InvalidConfig {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
