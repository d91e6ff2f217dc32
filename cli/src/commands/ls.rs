//! Directory listing command

use crate::output::render_dir_entries;
use anyhow::Result;
use rgview_core::fs::list_directory;

/// List one level of `path`, as the UI's file tree would show it
pub async fn ls_command(path: String, json: bool) -> Result<()> {
    let entries = list_directory(&path);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_dir_entries(&entries));
    }

    Ok(())
}
