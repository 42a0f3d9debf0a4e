//! Policy rules for opencode-hooks
//!
//! Pattern tables for destructive commands and workflow nudges. Matching is
//! case-insensitive regex over raw command text; there is no shell parsing,
//! and the occasional false positive is an accepted tradeoff.

pub mod destructive;
pub mod workflow;

/// What a matching rule does to the action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Abort the action
    Deny,

    /// Let the action through with advisory text
    Warn,
}

/// A policy rule definition
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// What a match does
    pub action: RuleAction,

    /// Regex pattern to match
    pub pattern: &'static str,

    /// Human-readable reason shown to the operator
    pub reason: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(
        id: &'static str,
        action: RuleAction,
        pattern: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            id,
            action,
            pattern,
            reason,
        }
    }
}
