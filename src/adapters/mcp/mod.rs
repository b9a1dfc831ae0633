//! MCP adapter: exposes the catalog operations as tools over stdio.

pub mod server;

pub use server::SystembolagetServer;
