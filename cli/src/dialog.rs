//! Native folder picker

use std::path::{Path, PathBuf};

/// Show a "choose folder" dialog, starting in `start` when it exists.
///
/// Returns the normalized absolute folder, or `None` if the user cancelled.
/// Must be called from the main thread on macOS.
#[cfg(feature = "native-dialog")]
pub fn pick_folder(start: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title("Select a folder to search");
    if let Some(start) = start.filter(|p| p.is_dir()) {
        dialog = dialog.set_directory(start);
    }

    let picked = dialog.pick_folder()?;
    tracing::debug!("Folder picked: {}", picked.display());
    Some(rgview_core::paths::normalize(&picked.to_string_lossy()))
}

#[cfg(not(feature = "native-dialog"))]
pub fn pick_folder(_start: Option<&Path>) -> Option<PathBuf> {
    tracing::warn!("rgview was built without the native-dialog feature");
    None
}
