//! Configuration types for rgview core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How ripgrep should treat letter case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Exact case matching (ripgrep's own default)
    Sensitive,
    /// Ignore case entirely
    Insensitive,
    /// Ignore case unless the query contains an uppercase letter
    #[default]
    Smart,
}

impl CaseMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Sensitive => "sensitive",
            CaseMode::Insensitive => "insensitive",
            CaseMode::Smart => "smart",
        }
    }

    /// Map the UI's optional checkbox value onto a mode
    pub fn from_flag(case_sensitive: Option<bool>, default: CaseMode) -> Self {
        match case_sensitive {
            Some(true) => CaseMode::Sensitive,
            Some(false) => CaseMode::Insensitive,
            None => default,
        }
    }
}

impl std::str::FromStr for CaseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(CaseMode::Sensitive),
            "insensitive" => Ok(CaseMode::Insensitive),
            "smart" => Ok(CaseMode::Smart),
            _ => Err(ConfigError::InvalidValue {
                field: "case".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// External editor invocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Editor command, resolved on PATH at launch time
    pub command: String,
    /// Flag that precedes the `file:line` argument
    pub goto_flag: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: "code".to_string(),
            goto_flag: "-g".to_string(),
        }
    }
}

/// A fully resolved application configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location of the ripgrep executable
    pub search_executable: PathBuf,
    /// Editor used for "open at line"
    #[serde(default)]
    pub editor: EditorConfig,
    /// CSS class wrapped around highlighted submatches
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,
    /// Case mode used when a request does not specify one
    #[serde(default)]
    pub default_case: CaseMode,
}

fn default_highlight_class() -> String {
    "highlight".to_string()
}

impl AppConfig {
    /// Create a config with defaults for everything but the executable
    pub fn new(search_executable: impl Into<PathBuf>) -> Self {
        Self {
            search_executable: search_executable.into(),
            editor: EditorConfig::default(),
            highlight_class: default_highlight_class(),
            default_case: CaseMode::default(),
        }
    }

    /// Set the editor settings
    pub fn with_editor(mut self, editor: EditorConfig) -> Self {
        self.editor = editor;
        self
    }

    /// Set the highlight CSS class
    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    /// Set the default case mode
    pub fn with_default_case(mut self, case: CaseMode) -> Self {
        self.default_case = case;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_executable.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "search_executable".to_string(),
                value: String::new(),
            });
        }

        if self.editor.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "editor".to_string(),
                value: self.editor.command.clone(),
            });
        }

        // The class lands inside an HTML attribute unescaped
        if self.highlight_class.is_empty()
            || !self
                .highlight_class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ' ')
        {
            return Err(ConfigError::InvalidValue {
                field: "highlight_class".to_string(),
                value: self.highlight_class.clone(),
            });
        }

        Ok(())
    }
}
