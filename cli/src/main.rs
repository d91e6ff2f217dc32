//! # rgview CLI
//!
//! Command-line interface for rgview - a ripgrep front-end with highlighted,
//! file-grouped results.
//!
//! ## Usage
//!
//! - `rgview` - Start interactive mode
//! - `rgview search <QUERY> <PATHS>...` - Run a single search
//! - `rgview ls [PATH]` - List one directory level
//! - `rgview open <FILE> <LINE>` - Open a file at a line in the editor
//! - `rgview pick` - Choose a folder with the native dialog
//! - `rgview serve` - Answer JSON requests from a UI over stdin/stdout
//! - `rgview endpoints` - Show the endpoints `serve` exposes

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod dialog;
mod endpoints;
mod interactive;
mod output;

use commands::{
    endpoints_command, interactive_command, ls_command, open_command, pick_command,
    search_command, serve_command, SearchArgs,
};
use config::CliConfigLoader;

/// rgview - search with ripgrep, browse results grouped by file
#[derive(Parser)]
#[command(name = "rgview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A ripgrep front-end with highlighted, file-grouped results")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// ripgrep executable override
    #[arg(long, global = true, env = "RGVIEW_RG_PATH")]
    rg_path: Option<String>,

    /// Editor command override
    #[arg(long, global = true, env = "RGVIEW_EDITOR")]
    editor: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Working directory
    #[arg(long, global = true)]
    working_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search(SearchArgs),

    /// List the immediate children of a directory
    Ls {
        /// Directory to list
        #[arg(default_value = ".")]
        path: String,

        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Open a file at a line in the configured editor
    Open {
        /// File to open
        file: String,

        /// 1-based line number
        line: u64,

        /// Workspace folder to open alongside the file
        #[arg(long)]
        root: Option<String>,
    },

    /// Choose a folder with the native dialog and print it
    Pick,

    /// Serve line-delimited JSON requests on stdin/stdout
    Serve,

    /// Show the endpoints available through `serve`
    Endpoints,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(rg_path) = &cli.rg_path {
        loader = loader.with_rg_path_override(rg_path.clone());
    }

    if let Some(editor) = &cli.editor {
        loader = loader.with_editor_override(editor.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for results and bridge responses
    if cli.verbose {
        rgview_core::init_tracing_with_debug(true);
    } else {
        rgview_core::init_tracing();
    }

    // Change working directory if specified
    if let Some(working_dir) = &cli.working_dir {
        std::env::set_current_dir(working_dir)?;
    }

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Search(args)) => search_command(args, config_loader).await,
        Some(Commands::Ls { path, json }) => ls_command(path, json).await,
        Some(Commands::Open { file, line, root }) => {
            open_command(file, line, root, config_loader).await
        }
        Some(Commands::Pick) => pick_command().await,
        Some(Commands::Serve) => serve_command(config_loader).await,
        Some(Commands::Endpoints) => endpoints_command().await,
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
