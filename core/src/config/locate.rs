//! Search executable discovery

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the ripgrep binary on this platform
pub fn search_executable_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "rg.exe"
    } else {
        "rg"
    }
}

/// `rg` shipped next to the running binary, whether or not it exists
pub fn bundled_search_executable() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(search_executable_name()))
}

/// Resolve where ripgrep lives.
///
/// Order: explicit path, bundled binary next to ours, `rg` on PATH.
/// Never fails: when nothing is found the bundled location is returned so that
/// the first search reports a configuration error naming it.
pub fn locate_search_executable(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        debug!("Using configured search executable: {}", path.display());
        return path.to_path_buf();
    }

    let bundled = bundled_search_executable();
    if let Some(path) = bundled.as_ref().filter(|p| p.is_file()) {
        info!("Found bundled ripgrep: {}", path.display());
        return path.clone();
    }

    if let Ok(path) = which::which("rg") {
        info!("Found ripgrep in PATH: {}", path.display());
        return path;
    }

    debug!("ripgrep not found; searches will report a configuration error");
    bundled.unwrap_or_else(|| PathBuf::from(search_executable_name()))
}
