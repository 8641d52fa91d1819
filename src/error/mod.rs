//! Error handling for stream consumers.
//!
//! The decoding and extraction core does not fail: malformed lines and
//! incomplete fields degrade to ignored lines and `parsed == false`. The
//! types here cover the edges around that core (chunk sources, schema
//! setup, configuration, file input).
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Transport | Chunk source failed | Yes |
//! | Configuration | Bad schema or env override | No |
//! | System | OS / file errors | No |

mod category;
mod result;
mod stream;

pub use category::ErrorCategory;
pub use result::StreamResult;
pub use stream::StreamError;
