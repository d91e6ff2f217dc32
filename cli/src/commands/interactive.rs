//! Interactive mode command

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Start interactive mode
pub async fn interactive_command(config_loader: crate::config::CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    debug!("Using ripgrep: {}", config.search_executable.display());

    // Get current working directory
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let start_root = current_dir.canonicalize().unwrap_or(current_dir);
    debug!("Starting root: {}", start_root.display());

    crate::interactive::run_interactive(Arc::new(config), start_root).await
}
