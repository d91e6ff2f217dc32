//! CLI endpoint registry with the desktop-only endpoints

use rgview_core::api::EndpointRegistry;

/// Create a registry with the core endpoints plus the folder picker
pub fn create_cli_registry() -> EndpointRegistry {
    let mut registry = EndpointRegistry::default(); // run_ripgrep, list_directory, open_in_editor

    registry.register_factory(Box::new(crate::endpoints::SelectFolderEndpointFactory));

    registry
}
