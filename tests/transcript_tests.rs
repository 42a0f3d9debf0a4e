//! Integration tests for the NDJSON transcript logger

use opencode_hooks::transcript::MAX_RESULT_CHARS;
use opencode_hooks::{HookInput, TranscriptLogger};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn logger_in(dir: &TempDir) -> (TranscriptLogger, PathBuf) {
    let path = dir.path().join("CHATLOG.ndjson");
    (TranscriptLogger::new(Some(&path)), path)
}

fn parsed_lines(path: &std::path::Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|l| serde_json::from_str(l).expect("every line parses standalone"))
        .collect()
}

#[test]
fn test_full_event_stream_mirrored_in_order() {
    let dir = TempDir::new().unwrap();
    let (logger, path) = logger_in(&dir);

    let envelopes = [
        r#"{"hook":"event","event":{"type":"session.created"}}"#,
        r#"{"hook":"tool.execute.before","tool":"bash","args":{"command":"ls"}}"#,
        r#"{"hook":"tool.execute.after","tool":"bash","result":"ok"}"#,
        r#"{"hook":"event","event":{"type":"session.idle"}}"#,
        r#"{"hook":"session.compacting"}"#,
    ];
    for json in envelopes {
        logger.record(&HookInput::from_json(json).unwrap());
    }

    let entries = parsed_lines(&path);
    let types: Vec<&str> = entries
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec![
            "session.created",
            "tool.execute.before",
            "tool.execute.after",
            "session.idle",
            "session.compacting",
        ]
    );
    for entry in &entries {
        assert!(entry["ts"].is_string());
    }
}

#[test]
fn test_oversized_result_truncated_on_disk() {
    let dir = TempDir::new().unwrap();
    let (logger, path) = logger_in(&dir);

    let long = "y".repeat(MAX_RESULT_CHARS + 1_000);
    let json = format!(
        r#"{{"hook":"tool.execute.after","tool":"bash","result":"{}"}}"#,
        long
    );
    logger.record(&HookInput::from_json(&json).unwrap());

    let entries = parsed_lines(&path);
    let recorded = entries[0]["result"].as_str().unwrap();
    assert_eq!(recorded.chars().count(), MAX_RESULT_CHARS);
}

#[test]
fn test_structured_result_recorded_as_is() {
    let dir = TempDir::new().unwrap();
    let (logger, path) = logger_in(&dir);

    let json = r#"{"hook":"tool.execute.after","tool":"read","result":{"lines":12,"path":"src/lib.rs"}}"#;
    logger.record(&HookInput::from_json(json).unwrap());

    let entries = parsed_lines(&path);
    assert_eq!(entries[0]["result"]["lines"], 12);
}

#[test]
fn test_non_text_non_object_result_is_null() {
    let dir = TempDir::new().unwrap();
    let (logger, path) = logger_in(&dir);

    logger.record(
        &HookInput::from_json(r#"{"hook":"tool.execute.after","tool":"bash","result":true}"#)
            .unwrap(),
    );

    let entries = parsed_lines(&path);
    assert!(entries[0]["result"].is_null());
}

#[test]
fn test_append_only_across_loggers() {
    let dir = TempDir::new().unwrap();
    let (first, path) = logger_in(&dir);
    first.record(
        &HookInput::from_json(r#"{"hook":"event","event":{"type":"session.created"}}"#).unwrap(),
    );

    // A later invocation opens the same file and appends.
    let second = TranscriptLogger::new(Some(&path));
    second.record(
        &HookInput::from_json(r#"{"hook":"event","event":{"type":"session.idle"}}"#).unwrap(),
    );

    assert_eq!(parsed_lines(&path).len(), 2);
}

#[test]
fn test_logging_failure_never_panics() {
    // Point at a path whose parent is a file, so every append fails.
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let logger = TranscriptLogger::new(Some(&blocker.join("CHATLOG.ndjson")));

    logger.record(
        &HookInput::from_json(r#"{"hook":"event","event":{"type":"session.created"}}"#).unwrap(),
    );
}
