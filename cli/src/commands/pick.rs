//! Folder picker command

use anyhow::{bail, Result};

/// Show the folder picker and print the chosen path
pub async fn pick_command() -> Result<()> {
    let start = std::env::current_dir().ok();

    match crate::dialog::pick_folder(start.as_deref()) {
        Some(folder) => {
            println!("{}", folder.display());
            Ok(())
        }
        None => bail!("No folder selected"),
    }
}
