//! Routine Stream - decode assistant SSE streams and reveal routine fields
//! while the JSON document is still arriving.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod replay;
pub mod sse;
pub mod traits;
