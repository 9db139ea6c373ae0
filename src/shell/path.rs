//! PATH lookup for probe binaries.
//!
//! Resolution walks the PATH entries directly instead of shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names to try for a tool in one PATH directory.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(target_os = "windows") && Path::new(tool).extension().is_none() {
        let pathext =
            std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
        pathext
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!("{}{}", tool, ext.to_lowercase()))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. A tool given
/// with a directory component is checked as-is.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() {
        return None;
    }

    let as_path = Path::new(tool);
    if as_path.components().count() > 1 {
        return (as_path.is_file() && is_executable(as_path)).then(|| as_path.to_path_buf());
    }

    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn resolves_first_matching_entry() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(second.path(), "fyne");
        let expected = make_executable(first.path(), "fyne");

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(resolve_tool_path("fyne", &entries), Some(expected));
    }

    #[test]
    #[cfg(unix)]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gcc"), "not a binary").unwrap();

        let entries = vec![dir.path().to_path_buf()];
        assert_eq!(resolve_tool_path("gcc", &entries), None);
    }

    #[test]
    #[cfg(unix)]
    fn accepts_explicit_path() {
        let dir = TempDir::new().unwrap();
        let tool = make_executable(dir.path(), "clang");

        let found = resolve_tool_path(tool.to_str().unwrap(), &[]);
        assert_eq!(found, Some(tool));
    }

    #[test]
    fn missing_tool_returns_none() {
        let entries = parse_system_path();
        assert_eq!(resolve_tool_path("nonexistentcommand12345", &entries), None);
    }

    #[test]
    fn empty_tool_returns_none() {
        assert_eq!(resolve_tool_path("", &parse_system_path()), None);
    }

    #[test]
    fn system_path_is_not_empty() {
        assert!(!parse_system_path().is_empty());
    }
}
