//! Session ledger
//!
//! One session notes file per calendar day plus a tool-call counter that
//! suggests strategic compaction past a threshold. Everything here is
//! best-effort: an unreadable or unwritable file leaves state as it was and
//! never surfaces an error to the host.

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::context::{date_string, time_string, PluginContext};
use crate::fsio;
use crate::output::Advisory;

/// How much of the session file survives into the compaction context
const SNAPSHOT_MAX_CHARS: usize = 15_000;

/// The prefix of the line `touch` rewrites in place
const LAST_UPDATED_PREFIX: &str = "**Last Updated:**";

/// Day-scoped session bookkeeping
pub struct SessionLedger {
    session_file: PathBuf,
    counter_file: PathBuf,
    compaction_log: PathBuf,
    today: String,
    threshold: u32,
}

impl SessionLedger {
    /// Build a ledger from the invocation context
    pub fn new(ctx: &PluginContext) -> Self {
        Self {
            session_file: ctx.session_file(),
            counter_file: ctx.counter_file(),
            compaction_log: ctx.compaction_log(),
            today: ctx.today.clone(),
            threshold: ctx.toggles.compact_threshold,
        }
    }

    /// Create today's session file from the template, or refresh only its
    /// Last Updated line. Operator edits to the rest of the file survive.
    pub fn touch(&self) {
        let ts = time_string(Local::now());

        if !self.session_file.exists() {
            let template = session_template(&self.today, &ts);
            fsio::write_text(&self.session_file, &template).ok();
            return;
        }

        let current = fsio::read_text(&self.session_file);
        if current.is_empty() {
            return;
        }
        if let Some(updated) = replace_last_updated(&current, &ts) {
            fsio::write_text(&self.session_file, &updated).ok();
        }
    }

    /// Increment today's tool-call counter.
    ///
    /// Returns an advisory exactly at the threshold, and again at every
    /// multiple of 25 above it.
    pub fn bump(&self) -> Option<Advisory> {
        let count = read_count(&self.counter_file) + 1;
        fsio::write_text(&self.counter_file, &count.to_string()).ok();

        if count == self.threshold {
            return Some(Advisory::new(
                "compact-threshold",
                format!(
                    "[StrategicCompact] {} tool calls reached - consider compaction if transitioning phases",
                    self.threshold
                ),
            ));
        }
        if count > self.threshold && count % 25 == 0 {
            return Some(Advisory::new(
                "compact-checkpoint",
                format!(
                    "[StrategicCompact] {} tool calls - good checkpoint for compaction if context is stale",
                    count
                ),
            ));
        }
        None
    }

    /// Record a compaction and return the session notes snapshot to inject,
    /// bounded to its last 15k characters.
    pub fn compaction(&self) -> Option<String> {
        self.touch();

        let now = Local::now();
        let stamp = format!("{} {}", date_string(now), time_string(now));
        fsio::append_line(
            &self.compaction_log,
            &format!("[{}] Context compaction triggered", stamp),
        )
        .ok();

        let snapshot = fsio::read_text(&self.session_file);
        if snapshot.is_empty() {
            return None;
        }
        let bounded = tail_chars(&snapshot, SNAPSHOT_MAX_CHARS);
        Some(format!(
            "Session continuity notes (auto-injected before compaction):\n\n{}",
            bounded
        ))
    }

    /// Today's counter value as persisted
    pub fn count(&self) -> u32 {
        read_count(&self.counter_file)
    }
}

fn session_template(today: &str, ts: &str) -> String {
    format!(
        "# Session: {today}\n\
**Date:** {today}\n\
**Started:** {ts}\n\
**Last Updated:** {ts}\n\
\n\
---\n\
\n\
## Current State\n\
\n\
[Session context goes here]\n\
\n\
### Completed\n\
- [ ]\n\
\n\
### In Progress\n\
- [ ]\n\
\n\
### Notes for Next Session\n\
-\n"
    )
}

/// Rewrite the Last Updated line, leaving every other line untouched.
/// Returns None when the file has no such line.
fn replace_last_updated(text: &str, ts: &str) -> Option<String> {
    let mut changed = false;
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if line.starts_with(LAST_UPDATED_PREFIX) {
                changed = true;
                format!("{} {}", LAST_UPDATED_PREFIX, ts)
            } else {
                line.to_string()
            }
        })
        .collect();
    changed.then(|| lines.join("\n"))
}

/// Current counter value; missing or corrupt files read as zero
fn read_count(path: &Path) -> u32 {
    fsio::read_text(path).trim().parse().unwrap_or(0)
}

/// Last `max` characters of `s`, on a char boundary
fn tail_chars(s: &str, max: usize) -> &str {
    let total = s.chars().count();
    if total <= max {
        return s;
    }
    let skip = total - max;
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
