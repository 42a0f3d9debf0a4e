//! opencode-hooks - Lifecycle hook plugins for OpenCode
//!
//! One process per hook invocation: reads a JSON event envelope from stdin,
//! runs the policy gate, session ledger, and transcript logger, and writes a
//! JSON hook response to stdout.
//!
//! # Usage
//!
//! ```bash
//! # As a hook bridge command (reads JSON from stdin, writes JSON to stdout)
//! echo '{"hook":"tool.execute.before","tool":"bash","args":{"command":"rm -rf /"}}' | opencode-hooks
//!
//! # With a specific config file
//! opencode-hooks --config ~/.config/opencode-hooks/config.toml
//! ```

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use opencode_hooks::{
    config::{Config, Toggles},
    context::PluginContext,
    gate::PolicyGate,
    input::HookInput,
    ledger::SessionLedger,
    output::{ContextEntry, HookOutput},
    transcript::TranscriptLogger,
    HostEvent,
};

/// Print version information
fn print_version() {
    println!("opencode-hooks {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"opencode-hooks - Lifecycle hook plugins for OpenCode

USAGE:
    opencode-hooks [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file

ENVIRONMENT (set to "0" to disable, default on):
    ENFORCE_DEV_TMUX        Block dev servers outside tmux
    WARN_LONG_TMUX          Warn for long-running commands outside tmux
    BLOCK_RANDOM_DOCS       Block creating new ad-hoc .md/.txt files
    WARN_CONSOLE_LOG        Warn when console.log appears in edited JS/TS files
    COMPACT_THRESHOLD       Tool calls before the compaction advisory (default 50)

USAGE AS HOOK:
    Register in the OpenCode plugin bridge for the hooks:
    event, tool.execute.before, tool.execute.after, session.compacting
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Load configuration
    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    // Read JSON from stdin
    let stdin = io::stdin();
    let mut input_json = String::new();

    for line in stdin.lock().lines() {
        match line {
            Ok(line) => input_json.push_str(&line),
            Err(_) => break,
        }
    }

    // Handle empty input
    if input_json.trim().is_empty() {
        // No event = nothing to do, allow
        let output = HookOutput::allow();
        println!("{}", output.to_json());
        return;
    }

    // Parse input; fail closed on parse errors, since malformed input on the
    // pre-tool hook could be an evasion attempt.
    let input = match HookInput::from_json(&input_json) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Failed to parse input (denying): {}", e);
            let output = HookOutput::deny_with_rule(
                "parse-error",
                &format!("Failed to parse hook input: {}", e),
            );
            println!("{}", output.to_json());
            return;
        }
    };

    // Build the per-invocation context
    let project_dir = input
        .directory
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let toggles = Toggles::from_env(&config);
    let ctx = PluginContext::new(&config, project_dir, toggles);

    // Mirror the envelope into the transcript before anything can veto it
    let transcript = if ctx.transcript_enabled {
        TranscriptLogger::new(Some(&ctx.transcript_path))
    } else {
        TranscriptLogger::new(None)
    };
    transcript.record(&input);

    let output = dispatch(input.into_event(), &ctx);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", output.to_json());
    let _ = handle.flush();
}

/// Route one event through the gate and the ledger
fn dispatch(event: HostEvent, ctx: &PluginContext) -> HookOutput {
    let gate = PolicyGate::new(ctx.toggles);
    let ledger = SessionLedger::new(ctx);

    match &event {
        HostEvent::SessionCreated | HostEvent::SessionIdle | HostEvent::SessionUpdated => {
            ledger.touch();
            HookOutput::allow()
        }
        HostEvent::ToolAfter { .. } => {
            let advisories: Vec<_> = ledger.bump().into_iter().collect();
            HookOutput::advise(&advisories)
        }
        HostEvent::Compacting => match ledger.compaction() {
            Some(snapshot) => HookOutput::with_context(vec![ContextEntry::text(snapshot)]),
            None => HookOutput::allow(),
        },
        HostEvent::ToolBefore { .. }
        | HostEvent::CommandExecuted { .. }
        | HostEvent::FileEdited { .. } => {
            let decision = gate.check(&event);
            HookOutput::from_decision(&decision)
        }
        // Already transcribed; nothing else reacts to it.
        HostEvent::Other { .. } => HookOutput::allow(),
    }
}
