//! Ad-hoc documentation file blocking
//!
//! New .md/.txt files outside the recognized doc entry points are vetoed for
//! repo hygiene. Edits to files that already exist on disk always pass.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::config::Toggles;
use crate::output::Decision;

static DOC_EXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(md|txt)$").expect("doc extension pattern"));

static ALLOWED_BASENAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(README|CLAUDE|AGENTS|CONTRIBUTING)\.md$").expect("doc basename pattern")
});

/// Directory prefixes where docs are always fine
const ALLOWED_PREFIXES: &[&str] = &[".opencode/", "legacy/", ".codex/"];

/// Treat backslash and forward-slash separators as equivalent
pub fn normalize_slash(path: &str) -> String {
    path.replace('\\', "/")
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether a slash-normalized path is a recognized place for documentation
fn is_allowed_doc_path(norm: &str) -> bool {
    let base = basename(norm);
    if ALLOWED_BASENAME_RE.is_match(base) {
        return true;
    }
    // Host config/instruction files are always allowed
    if base == "opencode.json" || base == "opencode.jsonc" {
        return true;
    }
    ALLOWED_PREFIXES.iter().any(|p| norm.starts_with(p))
}

/// Check a write/edit target path
pub fn check_doc_path(path: &str, toggles: &Toggles) -> Decision {
    if !toggles.block_random_docs {
        return Decision::allow();
    }

    let norm = normalize_slash(path);
    if !DOC_EXT_RE.is_match(&norm) {
        return Decision::allow();
    }
    if is_allowed_doc_path(&norm) {
        return Decision::allow();
    }
    // Existing files may be edited regardless of this rule.
    if Path::new(path).exists() {
        return Decision::allow();
    }

    Decision::deny(
        "random-doc",
        format!(
            "[Hook] BLOCKED: creating ad-hoc documentation files is disabled for repo hygiene.\n\
[Hook] File: {}\n\
[Hook] Use an existing doc entry point (README/AGENTS) or an approved docs directory.\n\
[Hook] Disable with BLOCK_RANDOM_DOCS=0",
            norm
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Toggles;
    use std::fs;
    use tempfile::TempDir;

    fn toggles() -> Toggles {
        Toggles::all_on(50)
    }

    #[test]
    fn test_new_random_doc_denied() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NOTES.txt");
        let decision = check_doc_path(path.to_str().unwrap(), &toggles());
        assert!(decision.is_deny());
        assert_eq!(decision.rule_id(), Some("random-doc"));
    }

    #[test]
    fn test_existing_doc_editable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NOTES.txt");
        fs::write(&path, "notes").unwrap();
        assert!(check_doc_path(path.to_str().unwrap(), &toggles()).is_allow());
    }

    #[test]
    fn test_recognized_basenames_allowed() {
        let dir = TempDir::new().unwrap();
        for name in ["README.md", "readme.md", "CLAUDE.md", "AGENTS.md", "CONTRIBUTING.md"] {
            let path = dir.path().join(name);
            assert!(
                check_doc_path(path.to_str().unwrap(), &toggles()).is_allow(),
                "{} should be allowed",
                name
            );
        }
    }

    #[test]
    fn test_infrastructure_dirs_allowed() {
        assert!(check_doc_path(".opencode/notes.md", &toggles()).is_allow());
        assert!(check_doc_path("legacy/old-notes.txt", &toggles()).is_allow());
        assert!(check_doc_path(".codex/instructions.md", &toggles()).is_allow());
    }

    #[test]
    fn test_backslash_paths_normalized() {
        assert!(check_doc_path(r".opencode\notes.md", &toggles()).is_allow());
        let decision = check_doc_path(r"scratch\ideas.md", &toggles());
        assert!(decision.is_deny());
    }

    #[test]
    fn test_non_doc_extension_ignored() {
        assert!(check_doc_path("src/new_module.rs", &toggles()).is_allow());
        assert!(check_doc_path("data.json", &toggles()).is_allow());
    }

    #[test]
    fn test_toggle_off_allows_everything() {
        let mut t = toggles();
        t.block_random_docs = false;
        assert!(check_doc_path("scratch/ideas.md", &t).is_allow());
    }

    #[test]
    fn test_uppercase_extension_still_checked() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SCRATCH.MD");
        assert!(check_doc_path(path.to_str().unwrap(), &toggles()).is_deny());
    }
}
