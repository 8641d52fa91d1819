//! Session-level behavior over realistic line sequences.

mod common;

use common::*;
use routine_stream::adapters::RecordingObserver;
use routine_stream::extract::{extract_next_field, ExtractedField, FieldKind};
use routine_stream::sse::{ParserSession, SessionState, StreamEvent};
use std::sync::{Arc, Mutex};

#[test]
fn test_end_to_end_routine_turn() {
    let thread_ids = Arc::new(Mutex::new(Vec::new()));
    let completions = Arc::new(Mutex::new(Vec::new()));

    let mut session = ParserSession::new();
    let ids = Arc::clone(&thread_ids);
    let done = Arc::clone(&completions);
    session
        .on_thread_created(move |id| ids.lock().unwrap().push(id.to_string()))
        .on_complete(move |content, thread_id| {
            done.lock()
                .unwrap()
                .push((content.to_string(), thread_id.map(str::to_string)))
        });

    let lines = [
        r#"data: {"type":"thread_created","threadId":"t1"}"#,
        r#"data: {"type":"delta","content":"{\"routineTitle\": \"Morning Routine\", \"next"}"#,
        r#"data: {"type":"completed","content":"{\"routineTitle\":\"Morning Routine\"}","threadId":"t1"}"#,
        "data: [DONE]",
    ];
    for line in lines {
        session.process_message(line);
    }

    assert_eq!(*thread_ids.lock().unwrap(), vec!["t1"]);
    assert_eq!(
        *completions.lock().unwrap(),
        vec![(
            r#"{"routineTitle":"Morning Routine"}"#.to_string(),
            Some("t1".to_string())
        )]
    );
    assert!(session.is_done());

    let result = extract_next_field(session.accumulated_content(), 0);
    assert!(result.parsed());
    assert_eq!(result.kind(), Some(FieldKind::Title));
    assert_eq!(
        result.field,
        Some(ExtractedField::Title("Morning Routine".to_string()))
    );
    assert_eq!(
        result.last_index,
        r#"{"routineTitle": "Morning Routine""#.len()
    );
}

#[test]
fn test_chunk_boundaries_do_not_change_accumulator() {
    let document = r#"{"routineTitle": "Évening ✨", "steps": [{"title": "Tea", "duration": 5}]}"#;

    for size in [1, 2, 3, 7, 64] {
        let mut session = ParserSession::new();
        for chunk in chunked(document, size) {
            session.process_message(&delta_line(&chunk));
        }
        session.process_message(&done_line());
        assert_eq!(session.accumulated_content(), document, "chunk size {}", size);
    }
}

#[test]
fn test_lines_after_done_change_nothing() {
    let recorder = RecordingObserver::new();
    let mut session = ParserSession::new();
    session.subscribe(Box::new(recorder.clone()));

    session.process_message(&delta_line("{\"a\":"));
    session.process_message(&done_line());
    let before = recorder.len();

    for line in [
        delta_line("1}"),
        thread_created_line("t2"),
        completed_line("{}", None),
        error_line("late"),
        done_line(),
    ] {
        assert_eq!(session.process_message(&line), None);
    }

    assert_eq!(session.accumulated_content(), "{\"a\":");
    assert_eq!(session.state(), SessionState::Done);
    assert_eq!(recorder.len(), before);
}

#[test]
fn test_observer_sees_one_notification_per_line() {
    let recorder = RecordingObserver::new();
    let mut session = ParserSession::new();
    session.subscribe(Box::new(recorder.clone()));

    let lines = [
        thread_created_line("t1"),
        String::new(),
        delta_line("{"),
        ": keep-alive".to_string(),
        error_line("tool call failed"),
        delta_line("}"),
        completed_line("{}", Some("t1")),
        done_line(),
    ];
    for line in &lines {
        session.process_message(line);
    }

    assert_eq!(
        recorder.events(),
        vec![
            StreamEvent::ThreadCreated {
                thread_id: "t1".to_string()
            },
            StreamEvent::Delta {
                content: "{".to_string()
            },
            StreamEvent::Error {
                message: "tool call failed".to_string()
            },
            StreamEvent::Delta {
                content: "}".to_string()
            },
            StreamEvent::Completed {
                content: "{}".to_string(),
                thread_id: Some("t1".to_string())
            },
        ]
    );
}

#[test]
fn test_session_reuse_across_turns() {
    let mut session = ParserSession::new();

    session.process_message(&delta_line("turn one"));
    session.process_message(&done_line());
    assert!(session.is_done());

    session.reset();
    session.process_message(&delta_line("turn two"));
    assert_eq!(session.accumulated_content(), "turn two");
    assert!(!session.is_done());
}
