//! Output formatting for hook responses
//!
//! Produces the JSON the bridge expects: a permission decision for vetoes,
//! a system message for advisories, and context entries for compaction.

use serde::Serialize;

/// Main output structure returned to the bridge
#[derive(Debug, Serialize)]
pub struct HookOutput {
    /// Hook-specific output containing the permission decision
    #[serde(rename = "hookSpecificOutput", skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<HookSpecificOutput>,

    /// Optional system message to show the user
    #[serde(rename = "systemMessage", skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,

    /// Text entries to append to the compaction context
    #[serde(rename = "additionalContext", skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<Vec<ContextEntry>>,
}

/// Hook-specific output with permission decision
#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    /// The hook this decision applies to (always the pre-tool hook)
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,

    /// Permission decision: "allow" or "deny"
    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,
}

/// One context entry injected at compaction time
#[derive(Debug, Serialize)]
pub struct ContextEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub text: String,
}

impl ContextEntry {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            entry_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// A non-blocking message surfaced to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Rule that produced this advisory
    pub rule_id: String,

    /// Message text
    pub text: String,
}

impl Advisory {
    pub fn new(rule_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            text: text.into(),
        }
    }
}

/// Decision result from the policy gate.
///
/// Warn-level rule matches accumulate as advisories on an Allow; the first
/// blocking match wins and produces a Deny.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Allow the operation, possibly with advisory text
    Allow { advisories: Vec<Advisory> },

    /// Abort the operation
    Deny { rule_id: String, reason: String },
}

impl Decision {
    /// Create a plain allow decision
    pub fn allow() -> Self {
        Decision::Allow {
            advisories: Vec::new(),
        }
    }

    /// Create an allow decision carrying advisories
    pub fn allow_with(advisories: Vec<Advisory>) -> Self {
        Decision::Allow { advisories }
    }

    /// Create a deny decision
    pub fn deny(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Deny {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an allow decision
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    /// Check if this is a deny decision
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    /// Get the rule ID of the deny or the first advisory
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Decision::Allow { advisories } => advisories.first().map(|a| a.rule_id.as_str()),
            Decision::Deny { rule_id, .. } => Some(rule_id),
        }
    }

    /// Advisories attached to an allow (empty for deny)
    pub fn advisories(&self) -> &[Advisory] {
        match self {
            Decision::Allow { advisories } => advisories,
            Decision::Deny { .. } => &[],
        }
    }
}

impl HookOutput {
    /// Create an allow response (empty output = allow)
    pub fn allow() -> Self {
        HookOutput {
            hook_specific_output: None,
            system_message: None,
            additional_context: None,
        }
    }

    /// Create a deny response with rule ID and reason
    pub fn deny_with_rule(rule_id: &str, reason: &str) -> Self {
        HookOutput {
            hook_specific_output: Some(HookSpecificOutput {
                hook_event_name: "tool.execute.before".to_string(),
                permission_decision: "deny".to_string(),
            }),
            system_message: Some(format!("[hooks:{}] Blocked: {}", rule_id, reason)),
            additional_context: None,
        }
    }

    /// Create a response that allows but shows advisory text
    pub fn advise(advisories: &[Advisory]) -> Self {
        let message = advisories
            .iter()
            .map(|a| a.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        HookOutput {
            hook_specific_output: None,
            system_message: if message.is_empty() {
                None
            } else {
                Some(message)
            },
            additional_context: None,
        }
    }

    /// Create a response injecting compaction context
    pub fn with_context(entries: Vec<ContextEntry>) -> Self {
        HookOutput {
            hook_specific_output: None,
            system_message: None,
            additional_context: if entries.is_empty() {
                None
            } else {
                Some(entries)
            },
        }
    }

    /// Create output from a Decision
    pub fn from_decision(decision: &Decision) -> Self {
        match decision {
            Decision::Allow { advisories } => HookOutput::advise(advisories),
            Decision::Deny { rule_id, reason } => HookOutput::deny_with_rule(rule_id, reason),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
