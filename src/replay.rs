//! Transcript replay.
//!
//! Drives a recorded (or piped) assistant stream through a
//! [`ParserSession`] and turns everything a UI would react to into flat
//! records: session notifications, progressively revealed fields, and a
//! closing summary. The binary prints these as JSON lines.

use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncRead;

use crate::config::StreamConfig;
use crate::driver::{drive_session_with, reader_chunks, DriveOutcome};
use crate::error::StreamResult;
use crate::extract::{ExtractionResult, FieldKind, ProgressiveReveal};
use crate::sse::{ParserSession, SessionState, StreamEvent};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayRecord {
    ThreadCreated {
        thread_id: String,
    },
    Delta {
        content: String,
    },
    /// A field revealed before the document finished
    Field {
        kind: FieldKind,
        data: Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        last_index: usize,
    },
    Completed {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thread_id: Option<String>,
        /// `content` parsed as JSON; `None` when it is not valid JSON
        document: Option<Value>,
    },
    Error {
        message: String,
    },
    Summary {
        state: SessionState,
        accumulated_len: usize,
        fields_revealed: usize,
    },
}

impl ReplayRecord {
    fn from_field(result: ExtractionResult) -> Option<Self> {
        let field = result.field?;
        Some(ReplayRecord::Field {
            kind: field.kind(),
            index: field.index(),
            data: field.data(),
            last_index: result.last_index,
        })
    }
}

/// Everything produced by one replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub records: Vec<ReplayRecord>,
    pub outcome: DriveOutcome,
}

/// Replay the stream read from `reader`.
///
/// The last record is always a `Summary`.
pub async fn replay<R>(reader: R, config: &StreamConfig) -> StreamResult<Replay>
where
    R: AsyncRead + Unpin,
{
    let mut reveal = ProgressiveReveal::new(config.extractor()?);
    let mut session = ParserSession::new();
    let mut records = Vec::new();

    let outcome = drive_session_with(reader_chunks(reader), &mut session, |event, decoder| {
        match event {
            StreamEvent::ThreadCreated { thread_id } => records.push(ReplayRecord::ThreadCreated {
                thread_id: thread_id.clone(),
            }),
            StreamEvent::Delta { content } => {
                records.push(ReplayRecord::Delta {
                    content: content.clone(),
                });
                if config.reveal_on_delta {
                    records.extend(
                        reveal
                            .poll(decoder.accumulated_content())
                            .into_iter()
                            .filter_map(ReplayRecord::from_field),
                    );
                }
            }
            StreamEvent::Completed { content, thread_id } => {
                let document = match serde_json::from_str::<Value>(content) {
                    Ok(document) => Some(document),
                    Err(e) => {
                        tracing::warn!("Completed content is not valid JSON: {}", e);
                        None
                    }
                };
                records.push(ReplayRecord::Completed {
                    content: content.clone(),
                    thread_id: thread_id.clone(),
                    document,
                });
            }
            StreamEvent::Error { message } => records.push(ReplayRecord::Error {
                message: message.clone(),
            }),
            StreamEvent::Done | StreamEvent::Invalid => {}
        }
    })
    .await?;

    records.push(ReplayRecord::Summary {
        state: session.state(),
        accumulated_len: session.accumulated_content().len(),
        fields_revealed: reveal.revealed_count(),
    });

    Ok(Replay { records, outcome })
}
