//! Configuration loading for opencode-hooks
//!
//! Supports TOML configuration with embedded defaults, plus the per-invocation
//! environment toggles the legacy hooks used.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Tool-call count at which the first compaction advisory fires
    pub compact_threshold: u32,

    /// Enable the NDJSON transcript logger
    pub transcript: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            compact_threshold: 50,
            transcript: true,
        }
    }
}

/// Where the plugins keep their files, relative to the project directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory for day-scoped counter files
    pub state_dir: String,

    /// Directory for session notes and the compaction log
    pub sessions_dir: String,

    /// Transcript file at the repo root
    pub transcript_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            state_dir: ".opencode/state".to_string(),
            sessions_dir: ".opencode/sessions".to_string(),
            transcript_file: "CHATLOG.ndjson".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub layout: LayoutConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".config/opencode-hooks/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/opencode-hooks/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }
}

/// Per-invocation environment switches.
///
/// The legacy hooks read these on every event rather than caching them, so a
/// user can flip a toggle mid-session. Since this binary runs once per event,
/// reading the environment at construction gives the same behavior.
#[derive(Debug, Clone, Copy)]
pub struct Toggles {
    /// Block dev servers started outside tmux
    pub enforce_dev_tmux: bool,

    /// Warn for long-running commands outside tmux
    pub warn_long_tmux: bool,

    /// Block creating new ad-hoc .md/.txt files
    pub block_random_docs: bool,

    /// Warn when console.log appears in edited JS/TS files
    pub warn_console_log: bool,

    /// Tool-call count for the first compaction advisory
    pub compact_threshold: u32,

    /// Whether the process is running inside a tmux session
    pub in_tmux: bool,
}

/// Boolean env toggle: unset defaults on; "0" or "false" turns it off.
fn env_on(name: &str) -> bool {
    match env::var(name) {
        Ok(v) => v != "0" && !v.eq_ignore_ascii_case("false"),
        Err(_) => true,
    }
}

impl Toggles {
    /// Read the current environment, falling back to `config` for the threshold
    pub fn from_env(config: &Config) -> Self {
        let compact_threshold = env::var("COMPACT_THRESHOLD")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(config.general.compact_threshold);

        Self {
            enforce_dev_tmux: env_on("ENFORCE_DEV_TMUX"),
            warn_long_tmux: env_on("WARN_LONG_TMUX"),
            block_random_docs: env_on("BLOCK_RANDOM_DOCS"),
            warn_console_log: env_on("WARN_CONSOLE_LOG"),
            compact_threshold,
            in_tmux: env::var("TMUX").map(|v| !v.is_empty()).unwrap_or(false),
        }
    }

    /// All toggles on, outside tmux. Deterministic baseline for tests.
    pub fn all_on(compact_threshold: u32) -> Self {
        Self {
            enforce_dev_tmux: true,
            warn_long_tmux: true,
            block_random_docs: true,
            warn_console_log: true,
            compact_threshold,
            in_tmux: false,
        }
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
compact_threshold = 50
transcript = true

[layout]
state_dir = ".opencode/state"
sessions_dir = ".opencode/sessions"
transcript_file = "CHATLOG.ndjson"
"#;
