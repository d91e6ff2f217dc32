//! Stdio bridge command

use crate::config::CliConfigLoader;
use crate::endpoints::create_cli_registry;
use anyhow::Result;
use rgview_core::api::serve;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

/// Answer line-delimited JSON requests on stdin until it closes
pub async fn serve_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = Arc::new(config_loader.load().await?);
    let executor = create_cli_registry().create_executor(config);
    info!("Serving endpoints: {}", executor.list_endpoints().join(", "));

    let reader = BufReader::new(tokio::io::stdin());
    let handled = serve(&executor, reader, tokio::io::stdout()).await?;
    info!("Handled {} requests", handled);

    Ok(())
}
