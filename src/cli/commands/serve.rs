//! Implementation of the `serve` command.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tracing::info;

use super::build_catalog;
use crate::adapters::mcp::SystembolagetServer;
use crate::domain::models::Config;

pub async fn execute(config: &Config) -> Result<()> {
    let catalog = build_catalog(config)?;
    let server = SystembolagetServer::new(catalog);

    info!(
        api_base_url = %config.upstream.api_base_url,
        "MCP server ready, listening on stdio"
    );

    let (stdin, stdout) = (tokio::io::stdin(), tokio::io::stdout());
    let service = server
        .serve((stdin, stdout))
        .await
        .context("Failed to initialize MCP server")?;

    // Keep running until the connection is closed
    service.waiting().await.context("Server error during execution")?;

    info!("MCP connection closed");
    Ok(())
}
