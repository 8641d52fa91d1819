//! Line framing for raw byte chunks
//!
//! Transports hand over bytes in arbitrary chunk boundaries, possibly in
//! the middle of a line or a UTF-8 sequence. `LineBuffer` holds the
//! unterminated tail and yields complete lines.

/// Accumulates byte chunks and splits them into lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
    /// Prefix of `pending` already known to hold no `\n`
    scanned: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completed.
    ///
    /// Lines are split on `\n`; a trailing `\r` is removed. Lines that are
    /// not valid UTF-8 are dropped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        let mut search_from = self.scanned;
        while let Some(offset) = self.pending[search_from..].iter().position(|b| *b == b'\n') {
            let end = search_from + offset;
            if let Some(line) = decode_line(&self.pending[start..end]) {
                lines.push(line);
            }
            start = end + 1;
            search_from = start;
        }
        self.pending.drain(..start);
        self.scanned = self.pending.len();

        lines
    }

    /// Flush the final unterminated line, if any.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        self.scanned = 0;
        let rest = std::mem::take(&mut self.pending);
        decode_line(&rest)
    }

    /// Bytes received but not yet part of a complete line.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

fn decode_line(raw: &[u8]) -> Option<String> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => Some(line.to_string()),
        Err(e) => {
            tracing::debug!("Dropping non UTF-8 stream line: {}", e);
            None
        }
    }
}
