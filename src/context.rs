//! Per-invocation plugin context
//!
//! Resolved paths and configuration for one hook invocation. The date is
//! captured when the context is built, so every component in the same
//! invocation agrees on which day-scoped files it is touching, and a process
//! running across midnight cannot mix days within one event.

use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::config::{Config, Toggles};

/// Resolved paths and switches for one hook invocation
#[derive(Debug, Clone)]
pub struct PluginContext {
    /// Project root the bridge reported (or cwd)
    pub project_dir: PathBuf,

    /// Directory for day-scoped counter files
    pub state_dir: PathBuf,

    /// Directory for session notes and the compaction log
    pub sessions_dir: PathBuf,

    /// NDJSON transcript at the repo root
    pub transcript_path: PathBuf,

    /// Whether the transcript logger is active
    pub transcript_enabled: bool,

    /// Today's date, YYYY-MM-DD
    pub today: String,

    /// Environment toggles for this invocation
    pub toggles: Toggles,
}

/// Format a timestamp as YYYY-MM-DD
pub fn date_string(t: DateTime<Local>) -> String {
    t.format("%Y-%m-%d").to_string()
}

/// Format a timestamp as HH:MM:SS
pub fn time_string(t: DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

impl PluginContext {
    /// Build a context for one invocation
    pub fn new(config: &Config, project_dir: PathBuf, toggles: Toggles) -> Self {
        Self {
            state_dir: project_dir.join(&config.layout.state_dir),
            sessions_dir: project_dir.join(&config.layout.sessions_dir),
            transcript_path: project_dir.join(&config.layout.transcript_file),
            transcript_enabled: config.general.transcript,
            today: date_string(Local::now()),
            toggles,
            project_dir,
        }
    }

    /// Today's session notes file
    pub fn session_file(&self) -> PathBuf {
        self.sessions_dir.join(format!("{}-session.md", self.today))
    }

    /// Today's tool-call counter file
    pub fn counter_file(&self) -> PathBuf {
        self.state_dir.join(format!("tool-count-{}.txt", self.today))
    }

    /// Append-only compaction log
    pub fn compaction_log(&self) -> PathBuf {
        self.sessions_dir.join("compaction-log.txt")
    }
}
