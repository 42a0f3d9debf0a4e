//! Destructive command denylist
//!
//! These rules are always active and have no environment toggle. Unlike the
//! workflow nudges, a match here is an unconditional veto.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::rules::{Rule, RuleAction};

/// Commands that can wipe disks, filesystems, or the machine itself
pub const DESTRUCTIVE_RULES: &[Rule] = &[
    // Disk wipe / format utilities
    Rule::new(
        "dd-raw",
        RuleAction::Deny,
        r"(?i)\bdd\b",
        "dd can overwrite raw disk devices",
    ),
    Rule::new(
        "mkfs",
        RuleAction::Deny,
        r"(?i)\bmkfs(\.|\b)",
        "Formatting a filesystem",
    ),
    Rule::new(
        "diskpart",
        RuleAction::Deny,
        r"(?i)\bdiskpart\b",
        "Windows disk partitioning tool",
    ),
    Rule::new(
        "format-drive",
        RuleAction::Deny,
        r"(?i)\bformat\b\s+[a-z]:",
        "Formatting a Windows drive",
    ),
    // Machine lifecycle
    Rule::new(
        "shutdown",
        RuleAction::Deny,
        r"(?i)\bshutdown\b",
        "Shutting down the machine",
    ),
    Rule::new(
        "reboot",
        RuleAction::Deny,
        r"(?i)\breboot\b",
        "Rebooting the machine",
    ),
    Rule::new(
        "poweroff",
        RuleAction::Deny,
        r"(?i)\bpoweroff\b",
        "Powering off the machine",
    ),
    // Forced recursive delete of root or home
    Rule::new(
        "rm-rf-root",
        RuleAction::Deny,
        r"(?i)\brm\b\s+-rf\b\s+/",
        "Recursive forced delete under /",
    ),
    Rule::new(
        "rm-rf-home",
        RuleAction::Deny,
        r"(?i)\brm\b\s+-rf\b\s+~",
        "Recursive forced delete of the home directory",
    ),
];

static DESTRUCTIVE_SET: Lazy<RegexSet> = Lazy::new(|| {
    let patterns: Vec<&str> = DESTRUCTIVE_RULES.iter().map(|r| r.pattern).collect();
    RegexSet::new(patterns).unwrap_or_else(|_| RegexSet::empty())
});

/// First destructive rule matching `command`, if any
pub fn match_rule(command: &str) -> Option<&'static Rule> {
    DESTRUCTIVE_SET
        .matches(command)
        .iter()
        .next()
        .and_then(|idx| DESTRUCTIVE_RULES.get(idx))
}
