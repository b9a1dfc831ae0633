//! Command-line interface.
//!
//! `serve` runs the MCP server on stdio. `key` and `config` are
//! diagnostics for checking key acquisition and the effective configuration.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "systembolaget-mcp")]
#[command(about = "MCP server for the Systembolaget product catalog and store directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load configuration from this YAML file instead of .systembolaget-mcp/
    #[arg(short, long, global = true, env = "SYSTEMBOLAGET_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server over stdio (default)
    Serve,

    /// Acquire the API key once and report where it came from
    Key,

    /// Print the effective configuration
    Config,
}

/// Print a command failure to stderr and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
