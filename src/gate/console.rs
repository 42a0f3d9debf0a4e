//! console.log leftovers in edited source files
//!
//! Reads the post-edit on-disk content, not the diff, so it reports whatever
//! is actually left in the file after the edit landed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::config::Toggles;
use crate::fsio;
use crate::gate::docs::normalize_slash;
use crate::output::Advisory;

/// Debug-print marker we look for
const MARKER: &str = "console.log";

/// Maximum hit lines listed in one advisory
const MAX_HITS: usize = 5;

static SOURCE_EXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(ts|tsx|js|jsx)$").expect("source extension pattern"));

/// Advisory for an edited file that still contains console.log, if any
pub fn check_edited_file(path: &str, toggles: &Toggles) -> Option<Advisory> {
    if !toggles.warn_console_log {
        return None;
    }

    let norm = normalize_slash(path);
    if norm.is_empty() || !SOURCE_EXT_RE.is_match(&norm) {
        return None;
    }

    let content = fsio::read_text(Path::new(path));
    if content.is_empty() || !content.contains(MARKER) {
        return None;
    }

    let mut hits = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.contains(MARKER) {
            hits.push(format!("{}: {}", i + 1, line.trim()));
            if hits.len() >= MAX_HITS {
                break;
            }
        }
    }

    let mut text = format!("[Hook] WARNING: console.log found in {}\n", norm);
    for hit in &hits {
        text.push_str(hit);
        text.push('\n');
    }
    text.push_str("[Hook] Remove console.log before committing.");

    Some(Advisory::new("console-log", text))
}
