//! CLI-specific endpoints for the UI bridge

pub mod registry;
pub mod select_folder;

pub use registry::create_cli_registry;
pub use select_folder::{SelectFolderEndpoint, SelectFolderEndpointFactory};
