//! Best-effort filesystem helpers
//!
//! The ledger and transcript never surface I/O failure to the host; callers
//! discard the `io::Result` at the call site with `.ok()` so the best-effort
//! policy is visible where it applies.

use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Read a file as UTF-8, empty string on any failure
pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Write text, creating parent directories as needed
pub fn write_text(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

/// Append one line, creating the file and parents as needed
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_text(&dir.path().join("nope.txt")), "");
    }

    #[test]
    fn test_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c.txt");
        write_text(&path, "hello").unwrap();
        assert_eq!(read_text(&path), "hello");
    }

    #[test]
    fn test_append_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        append_line(&path, "one").unwrap();
        append_line(&path, "two").unwrap();
        assert_eq!(read_text(&path), "one\ntwo\n");
    }
}
