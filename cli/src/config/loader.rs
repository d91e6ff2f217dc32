//! Simple CLI configuration loader for rgview
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./rgview.json or ./.rgview/config.json
//! 3. Git repository root: <repo_root>/.rgview/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/rgview/config.json or the platform config dir
//! 5. Built-in defaults (no files)
//!
//! `--rg-path` / `--editor` (or RGVIEW_RG_PATH / RGVIEW_EDITOR) override any file.

use anyhow::{Context, Result};
use rgview_core::config::{locate_search_executable, AppConfig, CaseMode, EditorConfig};
use rgview_core::error::ConfigError;
use rgview_core::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// ripgrep executable (`~` allowed); discovered when absent
    pub rg_path: Option<String>,
    /// Editor command, e.g. "code" or "cursor"
    pub editor: Option<String>,
    /// Flag placed before `file:line`, "-g" for VS Code
    pub editor_goto_flag: Option<String>,
    /// CSS class for highlighted matches
    pub highlight_class: Option<String>,
    /// "smart", "sensitive" or "insensitive"
    pub case: Option<String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    rg_path_override: Option<String>,
    editor_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            rg_path_override: None,
            editor_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set ripgrep path override
    pub fn with_rg_path_override(mut self, rg_path: String) -> Self {
        self.rg_path_override = Some(rg_path);
        self
    }

    /// Set editor override
    pub fn with_editor_override(mut self, editor: String) -> Self {
        self.editor_override = Some(editor);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<AppConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?.unwrap_or_default()
        };

        // Step 2: Apply flag overrides
        if let Some(rg_path) = &self.rg_path_override {
            config.rg_path = Some(rg_path.clone());
        }
        if let Some(editor) = &self.editor_override {
            config.editor = Some(editor.clone());
        }

        // Step 3: Resolve to final config
        resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<Option<RawConfig>> {
        // 1. Current working directory
        let cwd = std::env::current_dir()?;
        for candidate in [
            cwd.join("rgview.json"),
            cwd.join(".rgview").join("config.json"),
        ] {
            if candidate.is_file() {
                return Ok(Some(self.load_file(&candidate).await?));
            }
        }

        // 2. Git repository root
        if let Some(git_root) = find_git_root(&cwd) {
            let config_path = git_root.join(".rgview").join("config.json");
            if config_path.is_file() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }

        // 3. XDG / platform config directory
        if let Some(config_dir) = get_xdg_config_dir() {
            let config_path = config_dir.join("rgview").join("config.json");
            if config_path.is_file() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }

        debug!("No config file found, using defaults");
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(ConfigError::FileNotFound {
                    path: config_file.display().to_string(),
                }
                .into())
            }
        } else {
            Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into())
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading config file: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Find git repository root at or above `start`
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Get XDG config directory, falling back to the platform default
fn get_xdg_config_dir() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg_config) if !xdg_config.is_empty() => Some(PathBuf::from(xdg_config)),
        _ => dirs::config_dir(),
    }
}

/// Resolve raw config to AppConfig, locating ripgrep once
pub fn resolve_config(raw: RawConfig) -> Result<AppConfig> {
    let explicit = raw
        .rg_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(paths::normalize);
    let search_executable = locate_search_executable(explicit.as_deref());

    let defaults = EditorConfig::default();
    let editor = EditorConfig {
        command: raw.editor.unwrap_or(defaults.command),
        goto_flag: raw.editor_goto_flag.unwrap_or(defaults.goto_flag),
    };

    let mut config = AppConfig::new(search_executable).with_editor(editor);

    if let Some(class) = raw.highlight_class {
        config = config.with_highlight_class(class);
    }

    if let Some(case) = raw.case {
        let case: CaseMode = case.parse()?;
        config = config.with_default_case(case);
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    debug!(
        "Resolved config: rg={}, editor={}",
        config.search_executable.display(),
        config.editor.command
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_file_override() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.json");
        std::fs::write(
            &file,
            r#"{"rg_path": "/opt/rg/bin/rg", "editor": "cursor", "case": "insensitive"}"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await
            .unwrap();

        assert!(config.search_executable.ends_with("opt/rg/bin/rg"));
        assert_eq!(config.editor.command, "cursor");
        assert_eq!(config.editor.goto_flag, "-g");
        assert_eq!(config.default_case, CaseMode::Insensitive);
        assert_eq!(config.highlight_class, "highlight");
    }

    #[tokio::test]
    async fn test_load_from_directory_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"highlight_class": "match"}"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.highlight_class, "match");
    }

    #[tokio::test]
    async fn test_flag_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, r#"{"rg_path": "/from/file/rg", "editor": "vim"}"#).unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(file)
            .with_rg_path_override("/from/flag/rg".to_string())
            .with_editor_override("subl".to_string())
            .load()
            .await
            .unwrap();

        assert!(config.search_executable.ends_with("from/flag/rg"));
        assert_eq!(config.editor.command, "subl");
    }

    #[tokio::test]
    async fn test_missing_override_path_fails() {
        let err = CliConfigLoader::new()
            .with_config_override(PathBuf::from("/definitely/not/here.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::FileNotFound { path }) if path == "/definitely/not/here.json"
        ));
    }

    #[tokio::test]
    async fn test_directory_without_config_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .await
            .unwrap_err();
        let expected = dir.path().join("config.json").display().to_string();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::FileNotFound { path }) if *path == expected
        ));
    }

    #[tokio::test]
    async fn test_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, "{ not json").unwrap();

        let err = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_case_is_rejected() {
        let raw = RawConfig {
            case: Some("shouty".to_string()),
            ..Default::default()
        };
        let err = resolve_config(raw).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidValue { field, value }) if field == "case" && value == "shouty"
        ));
    }

    #[test]
    fn test_invalid_highlight_class_is_rejected() {
        let raw = RawConfig {
            highlight_class: Some("a<b".to_string()),
            ..Default::default()
        };
        let err = resolve_config(raw).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Configuration validation failed"));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidValue { field, .. }) if field == "highlight_class"
        ));
    }

    #[test]
    fn test_defaults_resolve() {
        let config = resolve_config(RawConfig::default()).unwrap();
        assert_eq!(config.editor, EditorConfig::default());
        assert_eq!(config.default_case, CaseMode::Smart);
        assert!(!config.search_executable.as_os_str().is_empty());
    }

    #[test]
    fn test_find_git_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_git_root(&nested), Some(dir.path().to_path_buf()));
    }
}
