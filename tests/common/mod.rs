//! Common test utilities for integration tests.
//!
//! Builders for wire lines so tests read as event sequences rather than
//! hand-escaped JSON.

#![allow(dead_code)]

use serde_json::json;

pub fn thread_created_line(thread_id: &str) -> String {
    format!(
        "data: {}",
        json!({ "type": "thread_created", "threadId": thread_id })
    )
}

pub fn delta_line(content: &str) -> String {
    format!("data: {}", json!({ "type": "delta", "content": content }))
}

pub fn completed_line(content: &str, thread_id: Option<&str>) -> String {
    let mut payload = json!({ "type": "completed", "content": content });
    if let Some(thread_id) = thread_id {
        payload["threadId"] = json!(thread_id);
    }
    format!("data: {}", payload)
}

pub fn error_line(message: &str) -> String {
    format!("data: {}", json!({ "type": "error", "error": message }))
}

pub fn done_line() -> String {
    "data: [DONE]".to_string()
}

/// Join lines with the blank separator line SSE puts between events.
pub fn transcript(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{}\n\n", l)).collect()
}

/// Split `text` into deltas of at most `size` characters.
pub fn chunked(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size.max(1))
        .map(|c| c.iter().collect())
        .collect()
}
