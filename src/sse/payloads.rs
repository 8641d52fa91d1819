//! Wire payload deserialization
//!
//! Internal structs used to deserialize the JSON that follows `data: ` on
//! a stream line. The `type` field selects the variant; anything that does
//! not fit (unknown type, missing field, wrong field type) fails to
//! deserialize and is treated as an invalid line by the parser.

use serde::Deserialize;

use crate::sse::events::StreamEvent;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum WirePayload {
    ThreadCreated {
        #[serde(rename = "threadId", alias = "thread_id")]
        thread_id: String,
    },
    Delta {
        content: String,
    },
    Completed {
        content: String,
        #[serde(default, rename = "threadId", alias = "thread_id")]
        thread_id: Option<String>,
    },
    Error {
        /// Some relays send `message` instead of `error`
        #[serde(alias = "message")]
        error: String,
    },
}

impl From<WirePayload> for StreamEvent {
    fn from(payload: WirePayload) -> Self {
        match payload {
            WirePayload::ThreadCreated { thread_id } => StreamEvent::ThreadCreated { thread_id },
            WirePayload::Delta { content } => StreamEvent::Delta { content },
            WirePayload::Completed { content, thread_id } => {
                StreamEvent::Completed { content, thread_id }
            }
            WirePayload::Error { error } => StreamEvent::Error { message: error },
        }
    }
}
