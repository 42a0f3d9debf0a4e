//! NDJSON transcript logging
//!
//! Mirrors every host event into CHATLOG.ndjson at the repo root. This is a
//! pure observer: it never blocks the action it records, and every failure
//! path degrades to either a minimal error record or silence.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::fsio;
use crate::input::HookInput;

/// Text results longer than this are truncated before logging
pub const MAX_RESULT_CHARS: usize = 20_000;

/// One transcript record
#[derive(Debug, Serialize)]
pub struct TranscriptEntry {
    /// Timestamp of the observation
    pub ts: DateTime<Utc>,

    /// Record type: an event type or a hook name
    #[serde(rename = "type")]
    pub entry_type: String,

    /// Tool name for tool.execute.* records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Event payload for generic event records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Tool arguments for tool.execute.before records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,

    /// Tool result for tool.execute.after records, size-bounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl TranscriptEntry {
    fn bare(entry_type: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            entry_type: entry_type.into(),
            tool: None,
            data: None,
            args: None,
            result: None,
        }
    }

    /// Record for a generic event-stream entry
    pub fn event(event_type: &str, data: Option<Value>) -> Self {
        Self {
            data,
            ..Self::bare(event_type)
        }
    }

    /// Record for a tool about to run
    pub fn tool_before(tool: Option<String>, args: Option<Value>) -> Self {
        Self {
            tool,
            args,
            ..Self::bare("tool.execute.before")
        }
    }

    /// Record for a finished tool. Text results are truncated, structured
    /// results kept as-is, anything else becomes null.
    pub fn tool_after(tool: Option<String>, result: Option<Value>) -> Self {
        let bounded = match result {
            Some(Value::String(s)) => Some(Value::String(truncate_chars(&s, MAX_RESULT_CHARS))),
            Some(Value::Object(o)) => Some(Value::Object(o)),
            Some(Value::Array(a)) => Some(Value::Array(a)),
            _ => Some(Value::Null),
        };
        Self {
            tool,
            result: bounded,
            ..Self::bare("tool.execute.after")
        }
    }
}

/// Append-only transcript writer
pub struct TranscriptLogger {
    path: Option<PathBuf>,
}

impl TranscriptLogger {
    /// Create a logger writing to `path`
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }

    /// Record one hook envelope, best-effort
    pub fn record(&self, input: &HookInput) {
        let entry = match input.hook.as_str() {
            "event" => match &input.event {
                Some(e) => TranscriptEntry::event(
                    &e.event_type,
                    Some(e.data.clone()).filter(|d| !d.is_null()),
                ),
                None => TranscriptEntry::bare("event"),
            },
            "tool.execute.before" => {
                TranscriptEntry::tool_before(input.tool.clone(), input.args.clone())
            }
            "tool.execute.after" => {
                TranscriptEntry::tool_after(input.tool.clone(), input.result.clone())
            }
            other => TranscriptEntry::bare(other),
        };
        self.append(&entry);
    }

    /// Append one entry. A record that fails to serialize is replaced with a
    /// minimal error record so the log file stays line-valid; I/O failures
    /// are swallowed.
    pub fn append(&self, entry: &TranscriptEntry) {
        let Some(path) = &self.path else {
            return;
        };
        let line = serde_json::to_string(entry).unwrap_or_else(|_| {
            format!(
                r#"{{"ts":"{}","type":"logger.error","error":"serialize_failed"}}"#,
                Utc::now().to_rfc3339()
            )
        });
        fsio::append_line(path, &line).ok();
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }
}

/// First `max` characters of `s`, on a char boundary
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
