//! Architectural Enforcement Integration Tests
//!
//! This package contains tests that enforce architectural principles:
//! - The headless core never imports a terminal/UI crate
//! - No blocking `std::thread::sleep` in production code (timers are tokio tasks)
//! - No `.unwrap()` / `.expect(` outside test code in the core
//!
//! These tests are designed to catch violations early in the development cycle.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Crates the headless core must never depend on
pub const UI_CRATES: &[&str] = &["ratatui", "crossterm", "textwrap", "unicode_width"];

/// A rule violation at a specific line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File containing the violation
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
}

/// Workspace root (two levels above this crate)
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// All `.rs` files under `dir`
pub fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Production lines of a source file: everything before the first
/// `#[cfg(test)]`, with line comments dropped
pub fn production_lines(source: &str) -> Vec<(usize, &str)> {
    source
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| {
            let t = line.trim_start();
            !t.starts_with("//")
        })
        .map(|(i, line)| (i + 1, line))
        .collect()
}

/// Find production lines under `dir` matching `predicate`
pub fn scan<F>(dir: &Path, predicate: F) -> Vec<Violation>
where
    F: Fn(&str) -> bool,
{
    let mut found = Vec::new();
    for path in rust_sources(dir) {
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for (line, text) in production_lines(&source) {
            if predicate(text) {
                found.push(Violation {
                    path: path.clone(),
                    line,
                    text: text.trim().to_string(),
                });
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_src() -> PathBuf {
        workspace_root().join("carousel/core/src")
    }

    #[test]
    fn test_core_sources_exist() {
        assert!(!rust_sources(&core_src()).is_empty());
    }

    #[test]
    fn test_core_has_no_ui_imports() {
        let violations = scan(&core_src(), |line| {
            UI_CRATES
                .iter()
                .any(|c| line.contains(&format!("{c}::")) || line.contains(&format!("use {c}")))
        });
        assert!(violations.is_empty(), "UI imports in core: {violations:#?}");
    }

    #[test]
    fn test_core_manifest_has_no_ui_dependencies() {
        let manifest =
            fs::read_to_string(workspace_root().join("carousel/core/Cargo.toml")).unwrap();
        for krate in UI_CRATES {
            let name = krate.replace('_', "-");
            assert!(
                !manifest.lines().any(|l| l.trim_start().starts_with(&name)),
                "core depends on {name}"
            );
        }
    }

    #[test]
    fn test_no_blocking_sleep() {
        for dir in ["carousel/core/src", "tui/src"] {
            let violations = scan(&workspace_root().join(dir), |line| {
                line.contains("thread::sleep")
            });
            assert!(violations.is_empty(), "blocking sleep: {violations:#?}");
        }
    }

    #[test]
    fn test_core_does_not_panic_on_results() {
        let violations = scan(&core_src(), |line| {
            line.contains(".unwrap()") || line.contains(".expect(")
        });
        assert!(violations.is_empty(), "unwrap/expect in core: {violations:#?}");
    }

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let src = "fn a() {}\n// note\n#[cfg(test)]\nmod tests { fn b() { x.unwrap(); } }\n";
        let lines = production_lines(src);
        assert_eq!(lines, vec![(1, "fn a() {}")]);
    }
}
