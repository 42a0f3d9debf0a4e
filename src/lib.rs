//! opencode-hooks - Lifecycle hook plugins for OpenCode
//!
//! This library ports a set of legacy Claude Code hooks into a single hook
//! binary for OpenCode's plugin bridge. Three independent plugins share one
//! process:
//!
//! - **Policy gate**: vetoes destructive shell commands and ad-hoc doc files
//!   before the tool runs, and surfaces workflow advisories (tmux, git push,
//!   console.log leftovers, PR follow-ups)
//! - **Session ledger**: one session note file per day plus a tool-call
//!   counter that suggests context compaction past a threshold
//! - **Transcript logger**: mirrors every host event into an append-only
//!   NDJSON file at the repo root
//!
//! # Example
//!
//! ```
//! use opencode_hooks::{PolicyGate, Toggles, HookInput};
//!
//! let gate = PolicyGate::new(Toggles::all_on(50));
//!
//! let input = r#"{"hook":"tool.execute.before","tool":"bash","args":{"command":"rm -rf /"}}"#;
//! let event = HookInput::from_json(input).unwrap().into_event();
//!
//! let decision = gate.check(&event);
//! assert!(decision.is_deny());
//! ```

pub mod config;
pub mod context;
pub mod fsio;
pub mod gate;
pub mod input;
pub mod ledger;
pub mod output;
pub mod rules;
pub mod transcript;

// Re-exports for convenience
pub use config::{Config, Toggles};
pub use context::PluginContext;
pub use gate::PolicyGate;
pub use input::{HookInput, HostEvent};
pub use ledger::SessionLedger;
pub use output::{Advisory, Decision, HookOutput};
pub use transcript::TranscriptLogger;
