//! Domain layer for the Systembolaget MCP server
//!
//! This module contains the credential and tool-parameter models, the
//! error taxonomy, and the ports infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CredentialError, FetchStage, ValidationError};
