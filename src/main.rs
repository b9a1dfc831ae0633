//! Systembolaget MCP server entry point.

use anyhow::Result;
use clap::Parser;

use systembolaget_mcp::cli::{commands, Cli, Commands};
use systembolaget_mcp::infrastructure::config::ConfigLoader;
use systembolaget_mcp::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        systembolaget_mcp::cli::handle_error(err, cli.json);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    // Held until exit so file logs are flushed
    let _logger = LoggerImpl::init(&config.logging)?;

    match cli.command.as_ref().unwrap_or(&Commands::Serve) {
        Commands::Serve => commands::serve::execute(&config).await,
        Commands::Key => commands::key::execute(&config, cli.json).await,
        Commands::Config => commands::config::execute(&config, cli.json),
    }
}
