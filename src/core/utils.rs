use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ensure the directory holding `file` exists and return it.
///
/// A bare file name resolves to the current directory.
pub fn ensure_parent_dir(file: &Path) -> io::Result<PathBuf> {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Parse a 1-based position typed by the user into a 0-based index below `len`.
pub fn parse_position(raw: &str, len: usize) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}
