//! Path normalization applied to every path entering the system

use std::path::{Path, PathBuf};

/// Expand `~` and make the path absolute against the working directory.
///
/// Symlinks are not resolved and the path does not have to exist.
pub fn normalize(input: &str) -> PathBuf {
    let expanded = shellexpand::tilde(input.trim());
    let path = Path::new(expanded.as_ref());
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Resolve a path reported by ripgrep against the primary search root
pub fn resolve_reported(reported: &Path, primary_root: &Path) -> PathBuf {
    if reported.is_absolute() {
        reported.to_path_buf()
    } else {
        primary_root.join(reported)
    }
}
