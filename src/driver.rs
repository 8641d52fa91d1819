//! Async stream driver.
//!
//! Connects a source of byte chunks (an HTTP body, a file, stdin) to a
//! [`StreamDecoder`]: chunks are framed into lines and fed one by one until
//! the decoder reaches a terminal state or the source runs dry. The driver
//! does not retry; a failed source aborts the session and is reported to
//! the caller.

use std::fmt::Display;

use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, Stream};
use futures_util::StreamExt;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{StreamError, StreamResult};
use crate::sse::{LineBuffer, StreamEvent};
use crate::traits::StreamDecoder;

/// Read size used by [`reader_chunks`]
const CHUNK_SIZE: usize = 8 * 1024;

/// How a driven stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
    /// `[DONE]` was received
    Completed,
    /// The source ended (or the decoder was already aborted) without
    /// `[DONE]`; the decoder is left aborted
    Truncated,
}

/// Feed every line from `chunks` into `decoder`.
pub async fn drive_session<S, B, E, D>(chunks: S, decoder: &mut D) -> StreamResult<DriveOutcome>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
    D: StreamDecoder + ?Sized,
{
    drive_session_with(chunks, decoder, |_, _| {}).await
}

/// Like [`drive_session`], calling `on_event` after each event the decoder
/// acted upon. The hook sees the decoder after the event was applied, so
/// `accumulated_content()` already includes a delta's fragment.
pub async fn drive_session_with<S, B, E, D, F>(
    chunks: S,
    decoder: &mut D,
    mut on_event: F,
) -> StreamResult<DriveOutcome>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
    D: StreamDecoder + ?Sized,
    F: FnMut(&StreamEvent, &D),
{
    futures_util::pin_mut!(chunks);
    let mut buffer = LineBuffer::new();

    if decoder.is_terminal() {
        return Ok(finish(decoder));
    }

    while let Some(chunk) = chunks.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("Stream source failed: {}", e);
                decoder.abort();
                return Err(StreamError::Transport {
                    message: e.to_string(),
                });
            }
        };

        for line in buffer.push(chunk.as_ref()) {
            if let Some(event) = decoder.process_message(&line) {
                on_event(&event, &*decoder);
            }
            if decoder.is_terminal() {
                return Ok(finish(decoder));
            }
        }
    }

    // Source ended; a last line may lack its newline
    if let Some(line) = buffer.finish() {
        if let Some(event) = decoder.process_message(&line) {
            on_event(&event, &*decoder);
        }
    }

    Ok(finish(decoder))
}

fn finish<D: StreamDecoder + ?Sized>(decoder: &mut D) -> DriveOutcome {
    if decoder.is_done() {
        return DriveOutcome::Completed;
    }
    tracing::info!(
        accumulated_len = decoder.accumulated_content().len(),
        "Stream ended without [DONE]"
    );
    decoder.abort();
    DriveOutcome::Truncated
}

/// Turn an async reader into a stream of byte chunks.
pub fn reader_chunks<R>(reader: R) -> impl Stream<Item = std::io::Result<Bytes>>
where
    R: AsyncRead + Unpin,
{
    stream::unfold(Some(reader), |reader| async move {
        let Some(mut reader) = reader else {
            return None;
        };
        let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
        match reader.read_buf(&mut buf).await {
            Ok(0) => None,
            Ok(_) => Some((Ok(buf.freeze()), Some(reader))),
            // Yield the error once, then end the stream
            Err(e) => Some((Err(e), None)),
        }
    })
}
