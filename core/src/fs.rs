//! One-level directory listing for lazily populated file trees

use crate::paths;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;
use walkdir::WalkDir;

/// A single child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    /// Absolute path of the entry
    pub path: String,
    pub is_dir: bool,
}

/// List the immediate children of `path`.
///
/// Dotfiles are skipped. Directories come first, then case-insensitive name
/// order. A missing or unreadable path gives an empty list.
pub fn list_directory(path: &str) -> Vec<DirEntry> {
    let root = paths::normalize(path);
    if !root.is_dir() {
        debug!("Not a directory, listing nothing: {}", root.display());
        return Vec::new();
    }

    let mut entries: Vec<DirEntry> = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                return None;
            }
            Some(DirEntry {
                is_dir: entry.path().is_dir(),
                path: entry.path().display().to_string(),
                name,
            })
        })
        .collect();

    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
