//! Input parsing for the OpenCode hook bridge JSON format
//!
//! The bridge sends one JSON envelope per hook invocation on stdin: the hook
//! name, tool/args for tool hooks, and an `event` object for the generic
//! event stream.

use serde::Deserialize;
use serde_json::Value;

/// Raw hook envelope from the bridge
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Hook name (e.g. "tool.execute.before", "event")
    pub hook: String,

    /// Tool being invoked, for tool.execute.* hooks
    #[serde(default)]
    pub tool: Option<String>,

    /// Tool arguments, for tool.execute.* hooks
    #[serde(default)]
    pub args: Option<Value>,

    /// Tool result, for tool.execute.after
    #[serde(default)]
    pub result: Option<Value>,

    /// Event payload, for the generic "event" hook
    #[serde(default)]
    pub event: Option<EventEnvelope>,

    /// Project root directory (defaults to cwd when absent)
    #[serde(default)]
    pub directory: Option<String>,
}

/// Generic event stream payload
#[derive(Debug, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub data: Value,
}

/// The host events these plugins react to.
///
/// A closed enum instead of string-keyed dispatch: every handler site matches
/// exhaustively, and anything unrecognized lands in `Other` as a no-op.
#[derive(Debug, Clone)]
pub enum HostEvent {
    SessionCreated,
    SessionIdle,
    SessionUpdated,

    /// A shell command finished; carries its text and captured output
    CommandExecuted { command: String, output: String },

    /// A file was edited on disk
    FileEdited { path: String },

    /// A tool is about to run
    ToolBefore { tool: String, args: Value },

    /// A tool finished running
    ToolAfter { tool: String, result: Option<Value> },

    /// The host is about to compact the session context
    Compacting,

    /// Anything we don't handle
    Other { name: String },
}

/// Pull the first non-empty string out of `args` under any of `keys`
pub fn arg_str(args: &Value, keys: &[&str]) -> Option<String> {
    let obj = args.as_object()?;
    for key in keys {
        if let Some(v) = obj.get(*key).and_then(|v| v.as_str()) {
            if !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }
    None
}

/// Path of an edited file from event data; the bridge nests it under `file`
/// in newer versions and inlines it in older ones.
fn edited_path(data: &Value) -> Option<String> {
    if let Some(file) = data.get("file") {
        if let Some(p) = arg_str(file, &["path", "filePath", "file_path"]) {
            return Some(p);
        }
    }
    arg_str(data, &["path", "filePath", "file_path"])
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Classify the envelope into a `HostEvent`
    pub fn into_event(self) -> HostEvent {
        match self.hook.as_str() {
            "tool.execute.before" => HostEvent::ToolBefore {
                tool: self.tool.unwrap_or_default(),
                args: self.args.unwrap_or(Value::Null),
            },
            "tool.execute.after" => HostEvent::ToolAfter {
                tool: self.tool.unwrap_or_default(),
                result: self.result,
            },
            "session.compacting" | "experimental.session.compacting" => HostEvent::Compacting,
            "event" => match self.event {
                Some(envelope) => classify_event(envelope),
                None => HostEvent::Other {
                    name: "event".to_string(),
                },
            },
            other => HostEvent::Other {
                name: other.to_string(),
            },
        }
    }

}

fn classify_event(envelope: EventEnvelope) -> HostEvent {
    let data = envelope.data;
    match envelope.event_type.as_str() {
        "session.created" => HostEvent::SessionCreated,
        "session.idle" => HostEvent::SessionIdle,
        "session.updated" => HostEvent::SessionUpdated,
        "command.executed" => HostEvent::CommandExecuted {
            command: arg_str(&data, &["command", "cmd"]).unwrap_or_default(),
            output: arg_str(&data, &["output", "stdout", "result"]).unwrap_or_default(),
        },
        "file.edited" => match edited_path(&data) {
            Some(path) => HostEvent::FileEdited { path },
            None => HostEvent::Other {
                name: "file.edited".to_string(),
            },
        },
        other => HostEvent::Other {
            name: other.to_string(),
        },
    }
}
