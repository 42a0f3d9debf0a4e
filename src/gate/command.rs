//! Shell command checking
//!
//! Pre-execution: destructive denylist, dev-server-outside-tmux veto, tmux
//! and git-push advisories. Post-execution: PR follow-up and build notes.

use crate::config::Toggles;
use crate::output::{Advisory, Decision};
use crate::rules::{destructive, workflow};

/// Check a command about to run
pub fn check_command(command: &str, toggles: &Toggles) -> Decision {
    // Destructive denylist first; no toggle, first match wins.
    if let Some(rule) = destructive::match_rule(command) {
        return Decision::deny(
            rule.id,
            format!(
                "{}. If you really intend this, run it manually outside the agent.",
                rule.reason
            ),
        );
    }

    if toggles.enforce_dev_tmux && !toggles.in_tmux && workflow::DEV_SERVER_RE.is_match(command) {
        let rule = &workflow::DEV_SERVER_RULE;
        return Decision::deny(rule.id, rule.reason);
    }

    let mut advisories = Vec::new();

    if toggles.warn_long_tmux && !toggles.in_tmux && workflow::LONG_CMD_RE.is_match(command) {
        let rule = &workflow::LONG_CMD_RULE;
        advisories.push(Advisory::new(rule.id, rule.reason));
    }

    // Always active, no toggle.
    if workflow::GIT_PUSH_RE.is_match(command) {
        let rule = &workflow::GIT_PUSH_RULE;
        advisories.push(Advisory::new(rule.id, rule.reason));
    }

    Decision::allow_with(advisories)
}

/// Advisories for a command that already ran
pub fn follow_ups(command: &str, output: &str) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if workflow::PR_CREATE_RE.is_match(command) {
        if let Some(caps) = workflow::PR_URL_RE.captures(output) {
            let url = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let repo = &caps[1];
            let number = &caps[2];
            advisories.push(Advisory::new(
                "pr-created",
                format!(
                    "[Hook] PR created: {}\n[Hook] To review: gh pr review {} --repo {}",
                    url, number, repo
                ),
            ));
        }
    }

    if workflow::BUILD_DONE_RE.is_match(command) {
        advisories.push(Advisory::new(
            "build-done",
            "[Hook] Build completed (you can run further checks if needed).",
        ));
    }

    advisories
}
