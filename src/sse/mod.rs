//! SSE (Server-Sent Events) stream decoding
//!
//! Decodes the assistant stream, where every meaningful line has the form
//! `data: <json-or-sentinel>`:
//! - `data: {"type": ...}` - a typed JSON event
//! - `data: [DONE]` - end of stream
//! - anything else (blank keep-alives, comments) - ignored
//!
//! # Module structure
//! - `events` - Event type definitions (StreamEvent, SessionState)
//! - `payloads` - Internal wire payload deserialization
//! - `parser` - Single-line decoding (parse_stream_line)
//! - `lines` - Byte chunk to line framing (LineBuffer)
//! - `session` - Stateful dispatcher (ParserSession)

mod events;
mod lines;
mod parser;
mod payloads;
mod session;

// Re-export public types
pub use events::{SessionState, StreamEvent, DATA_PREFIX, DONE_SENTINEL};
pub use lines::LineBuffer;
pub use parser::parse_stream_line;
pub use session::ParserSession;
