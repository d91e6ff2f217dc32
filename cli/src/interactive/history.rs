//! Recent search queries, persisted between interactive sessions
//!
//! Stored as plain text, one query per line, most recent first.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Maximum number of queries kept in memory and on disk
const MAX_HISTORY_SIZE: usize = 200;

const HISTORY_FILE_NAME: &str = "history.txt";

#[derive(Debug, Clone)]
pub struct QueryHistory {
    /// Most recent first, no duplicates
    entries: VecDeque<String>,
    history_file_path: PathBuf,
    max_size: usize,
    needs_save: bool,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::with_file_path(Self::default_history_path())
    }

    pub fn with_file_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            entries: VecDeque::new(),
            history_file_path: path.as_ref().to_path_buf(),
            max_size: MAX_HISTORY_SIZE,
            needs_save: false,
        }
    }

    pub fn default_history_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rgview");
        path.push(HISTORY_FILE_NAME);
        path
    }

    /// Load history from disk; a missing or unreadable file leaves it empty
    pub async fn load(&mut self) {
        if !self.history_file_path.exists() {
            debug!("History file does not exist, starting with empty history");
            return;
        }

        match fs::read_to_string(&self.history_file_path).await {
            Ok(content) => {
                self.entries = content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect();
                self.entries.truncate(self.max_size);
                debug!("Loaded {} history entries", self.entries.len());
            }
            Err(e) => warn!("Failed to read history file: {}", e),
        }
    }

    /// Write history to disk if it changed since the last save
    pub async fn save_if_needed(&mut self) -> std::io::Result<()> {
        if !self.needs_save {
            return Ok(());
        }

        if let Some(parent) = self.history_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = self
            .entries
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.history_file_path, content).await?;

        self.needs_save = false;
        debug!("Saved {} history entries", self.entries.len());
        Ok(())
    }

    /// Record a query; returns false if it was blank or already the most recent
    pub fn add_entry(&mut self, query: &str) -> bool {
        // Queries are stored one per line
        if query.trim().is_empty() || query.contains('\n') {
            return false;
        }
        if self.entries.front().map(String::as_str) == Some(query) {
            return false;
        }

        self.entries.retain(|entry| entry != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.max_size);
        self.needs_save = true;
        true
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().take(count).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entry_moves_duplicates_to_front() {
        let mut history = QueryHistory::with_file_path("/unused");
        assert!(history.add_entry("foo"));
        assert!(history.add_entry("bar"));
        assert!(!history.add_entry("bar"));
        assert!(history.add_entry("foo"));

        assert_eq!(history.recent(10).collect::<Vec<_>>(), vec!["foo", "bar"]);
        assert_eq!(history.most_recent(), Some("foo"));
    }

    #[test]
    fn test_blank_and_multiline_queries_are_skipped() {
        let mut history = QueryHistory::with_file_path("/unused");
        assert!(!history.add_entry("   "));
        assert!(!history.add_entry("a\nb"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_size_is_capped() {
        let mut history = QueryHistory::with_file_path("/unused");
        for i in 0..(MAX_HISTORY_SIZE + 10) {
            history.add_entry(&format!("q{}", i));
        }
        assert_eq!(history.recent(usize::MAX).count(), MAX_HISTORY_SIZE);
        assert_eq!(history.most_recent(), Some(format!("q{}", MAX_HISTORY_SIZE + 9).as_str()));
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");

        let mut history = QueryHistory::with_file_path(&path);
        history.add_entry("first");
        history.add_entry("second");
        history.save_if_needed().await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\nfirst");

        let mut reloaded = QueryHistory::with_file_path(&path);
        reloaded.load().await;
        assert_eq!(reloaded.recent(5).collect::<Vec<_>>(), vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = QueryHistory::with_file_path(dir.path().join("none.txt"));
        history.load().await;
        assert!(history.is_empty());
    }
}
