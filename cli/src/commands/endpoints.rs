//! Endpoint listing command

use anyhow::Result;
use tracing::info;

/// Show the endpoints a UI can call through `rgview serve`
pub async fn endpoints_command() -> Result<()> {
    info!("Listing available endpoints");

    use crate::endpoints::create_cli_registry;

    println!("🔌 Available Endpoints\n");

    let registry = create_cli_registry();
    for name in registry.list_endpoints() {
        if let Some((endpoint_name, description)) = registry.get_endpoint_info(name) {
            println!("📦 {}", endpoint_name);
            println!("   {}\n", description);
        }
    }

    println!("💡 Send one JSON request per line to `rgview serve`:");
    println!(r#"   {{"id": 1, "cmd": "list_directory", "params": {{"path": "."}}}}"#);

    Ok(())
}
