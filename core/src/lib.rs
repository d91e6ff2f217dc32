//! # rgview Core
//!
//! Core library for rgview - a front-end for the ripgrep search tool.
//!
//! This library builds ripgrep invocations from loosely-typed UI requests,
//! turns ripgrep's JSON output into escaped, highlighted records grouped by
//! file, and provides the small pieces of OS glue (directory listing, editor
//! launch) a search UI needs.

// Core modules
pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod fs;
pub mod paths;
pub mod process;
pub mod search;

// Re-export commonly used types
pub use api::{EndpointCall, EndpointExecutor, EndpointRegistry};
pub use config::{AppConfig, CaseMode, EditorConfig};
pub use error::{Error, Result};
pub use search::{run_search, GroupedResults, MatchRecord, SearchRequest, SearchResponse};

/// Current version of the rgview-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library, honouring `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
