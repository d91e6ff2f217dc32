//! Open-in-editor command

use crate::config::CliConfigLoader;
use anyhow::{bail, Result};
use colored::Colorize;
use rgview_core::editor::open_in_editor;

/// Launch the configured editor at `file:line` and return without waiting
pub async fn open_command(
    file: String,
    line: u64,
    root: Option<String>,
    config_loader: CliConfigLoader,
) -> Result<()> {
    let config = config_loader.load().await?;

    if !open_in_editor(&config.editor, &file, line, root.as_deref()) {
        bail!(
            "Could not open {}:{} with '{}'",
            file,
            line,
            config.editor.command
        );
    }

    println!("{} {}:{}", "Opened".green(), file, line);
    Ok(())
}
