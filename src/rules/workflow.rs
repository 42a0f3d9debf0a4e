//! Workflow rules and follow-up patterns
//!
//! Dev-server and long-running command handling for the tmux rules, the
//! git-push reminder, and the post-execution follow-up patterns.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::{Rule, RuleAction};

/// Dev servers belong inside tmux; blocked outside one when the toggle is on
pub const DEV_SERVER_RULE: Rule = Rule::new(
    "dev-server-tmux",
    RuleAction::Deny,
    r"(?i)\b(npm\s+run\s+dev|pnpm(\s+run)?\s+dev|yarn\s+dev|bun\s+run\s+dev)\b",
    "[Hook] BLOCKED: Dev server should run inside tmux for log access.\n\
[Hook] Suggested:\n  tmux new-session -d -s dev \"npm run dev\"\n  tmux attach -t dev\n\
[Hook] Disable with ENFORCE_DEV_TMUX=0",
);

/// Long build/install/test commands get a tmux tip outside a session
pub const LONG_CMD_RULE: Rule = Rule::new(
    "long-cmd-tmux",
    RuleAction::Warn,
    r"(?i)\b(npm\s+(install|test)\b|pnpm\s+(install|test)\b|yarn\s+(install|test)\b|bun\s+(install|test)\b|cargo\s+build\b|make\b|docker\b|pytest\b|vitest\b|playwright\b)",
    "[Hook] Tip: Consider running long commands inside tmux for session persistence.\n\
[Hook] Disable with WARN_LONG_TMUX=0",
);

/// Any git push gets a review reminder; always active
pub const GIT_PUSH_RULE: Rule = Rule::new(
    "git-push",
    RuleAction::Warn,
    r"(?i)\bgit\s+push\b",
    "[Hook] Reminder: review changes before push (git diff / git status).",
);

fn compiled(rule: &Rule) -> Regex {
    Regex::new(rule.pattern).unwrap_or_else(|_| Regex::new(r"$^").expect("never-match pattern"))
}

pub static DEV_SERVER_RE: Lazy<Regex> = Lazy::new(|| compiled(&DEV_SERVER_RULE));
pub static LONG_CMD_RE: Lazy<Regex> = Lazy::new(|| compiled(&LONG_CMD_RULE));
pub static GIT_PUSH_RE: Lazy<Regex> = Lazy::new(|| compiled(&GIT_PUSH_RULE));

/// gh pr create invocations
pub static PR_CREATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bgh\s+pr\s+create\b").expect("pr create pattern"));

/// GitHub PR URL with owner/repo and number captures
pub static PR_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://github\.com/([^/\s]+/[^/\s]+)/pull/(\d+)").expect("pr url pattern")
});

/// Build commands whose completion deserves a short note
pub static BUILD_DONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(npm\s+run\s+build|pnpm\s+build|yarn\s+build)\b").expect("build pattern")
});
