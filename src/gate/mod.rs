//! The policy gate
//!
//! Intercepts a proposed action before it runs, evaluates the applicable rule
//! groups in order, and answers Allow, Allow-with-advisories, or Deny. The
//! first blocking match wins; advisory matches accumulate. Post-execution
//! events only ever produce advisories.

pub mod command;
pub mod console;
pub mod docs;

use crate::config::Toggles;
use crate::input::{arg_str, HostEvent};
use crate::output::Decision;

/// The main policy gate
pub struct PolicyGate {
    toggles: Toggles,
}

impl PolicyGate {
    /// Create a gate with the given invocation toggles
    pub fn new(toggles: Toggles) -> Self {
        Self { toggles }
    }

    /// Evaluate one host event.
    ///
    /// Only pre-tool events can be denied; everything else is at most an
    /// allow with advisories. A missing command or path argument makes the
    /// event a silent no-op.
    pub fn check(&self, event: &HostEvent) -> Decision {
        match event {
            HostEvent::ToolBefore { tool, args } => match tool.as_str() {
                "bash" => match arg_str(args, &["command", "cmd", "script"]) {
                    Some(cmd) => command::check_command(&cmd, &self.toggles),
                    None => Decision::allow(),
                },
                "write" | "edit" => {
                    match arg_str(args, &["filePath", "file_path", "path", "filename"]) {
                        Some(path) => docs::check_doc_path(&path, &self.toggles),
                        None => Decision::allow(),
                    }
                }
                _ => Decision::allow(),
            },
            HostEvent::CommandExecuted { command, output } => {
                Decision::allow_with(command::follow_ups(command, output))
            }
            HostEvent::FileEdited { path } => Decision::allow_with(
                console::check_edited_file(path, &self.toggles)
                    .into_iter()
                    .collect(),
            ),
            // Session lifecycle, tool completion, and compaction belong to
            // the ledger and transcript; the gate lets them through.
            _ => Decision::allow(),
        }
    }

    /// Toggles this gate was built with
    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gate() -> PolicyGate {
        PolicyGate::new(Toggles::all_on(50))
    }

    fn bash_before(command: &str) -> HostEvent {
        HostEvent::ToolBefore {
            tool: "bash".to_string(),
            args: json!({ "command": command }),
        }
    }

    #[test]
    fn test_destructive_command_denied() {
        assert!(gate().check(&bash_before("rm -rf /")).is_deny());
    }

    #[test]
    fn test_plain_command_allowed() {
        assert!(gate().check(&bash_before("ls -la")).is_allow());
    }

    #[test]
    fn test_missing_command_is_noop() {
        let event = HostEvent::ToolBefore {
            tool: "bash".to_string(),
            args: json!({}),
        };
        let decision = gate().check(&event);
        assert!(decision.is_allow());
        assert!(decision.advisories().is_empty());
    }

    #[test]
    fn test_unknown_tool_passes_through() {
        let event = HostEvent::ToolBefore {
            tool: "webfetch".to_string(),
            args: json!({ "url": "https://example.com" }),
        };
        assert!(gate().check(&event).is_allow());
    }

    #[test]
    fn test_write_new_doc_denied() {
        let event = HostEvent::ToolBefore {
            tool: "write".to_string(),
            args: json!({ "filePath": "/definitely/missing/dir/SCRATCH.md" }),
        };
        assert!(gate().check(&event).is_deny());
    }

    #[test]
    fn test_missing_path_is_noop() {
        let event = HostEvent::ToolBefore {
            tool: "write".to_string(),
            args: json!({ "content": "hello" }),
        };
        assert!(gate().check(&event).is_allow());
    }

    #[test]
    fn test_command_executed_pr_advisory() {
        let event = HostEvent::CommandExecuted {
            command: "gh pr create".to_string(),
            output: "https://github.com/octo/widgets/pull/7".to_string(),
        };
        let decision = gate().check(&event);
        assert_eq!(decision.rule_id(), Some("pr-created"));
    }

    #[test]
    fn test_session_events_pass() {
        assert!(gate().check(&HostEvent::SessionCreated).is_allow());
        assert!(gate().check(&HostEvent::Compacting).is_allow());
    }
}
