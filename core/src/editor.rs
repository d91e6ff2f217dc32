//! Opening a matched file at a line in an external editor

use crate::config::EditorConfig;
use crate::paths;
use crate::process;
use std::path::Path;
use tracing::{info, warn};

/// Arguments for `<editor> [workspace_root] <goto_flag> <file>:<line>`
pub fn editor_args(
    editor: &EditorConfig,
    file: &Path,
    line: u64,
    root: Option<&Path>,
) -> Vec<String> {
    let mut args = Vec::with_capacity(3);
    if let Some(root) = root {
        args.push(root.display().to_string());
    }
    args.push(editor.goto_flag.clone());
    args.push(format!("{}:{}", file.display(), line));
    args
}

/// Launch the editor and return immediately.
///
/// Paths are normalized to absolute form; a blank root is treated as absent.
/// Returns `false` (after logging) if the editor cannot be found or started.
pub fn open_in_editor(
    editor: &EditorConfig,
    file_path: &str,
    line: u64,
    root_path: Option<&str>,
) -> bool {
    let file = paths::normalize(file_path);
    let root = root_path
        .filter(|r| !r.trim().is_empty())
        .map(paths::normalize);

    let program = match which::which(&editor.command) {
        Ok(program) => program,
        Err(e) => {
            warn!("Editor '{}' not found: {}", editor.command, e);
            return false;
        }
    };

    let args = editor_args(editor, &file, line, root.as_deref());
    match process::spawn_detached(&program, &args) {
        Ok(()) => {
            info!("Opened {}:{} in {}", file.display(), line, editor.command);
            true
        }
        Err(e) => {
            warn!("Failed to open {} in editor: {}", file.display(), e);
            false
        }
    }
}
