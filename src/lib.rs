//! Systembolaget MCP server
//!
//! Exposes the Systembolaget product catalog and store directory to MCP
//! clients as read-only tools. The catalog API needs a subscription key;
//! it is taken from an environment override or extracted from the public
//! website's application bundle, then cached for the process lifetime.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and port traits
//! - **Service Layer** (`services`): Catalog operations and output shaping
//! - **Infrastructure Layer** (`infrastructure`): HTTP, credentials, config, logging
//! - **Adapters** (`adapters`): The rmcp tool server
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use systembolaget_mcp::{ConfigLoader, CredentialProvider, HttpDocumentFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let fetcher = Arc::new(HttpDocumentFetcher::new(&config.upstream)?);
//!     let provider = CredentialProvider::from_config(&config.credentials, &config.upstream, fetcher)?;
//!     let key = provider.acquire_credential().await?;
//!     println!("{}", key.redacted());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CredentialError, FetchStage, ValidationError};
pub use domain::models::{Config, Credential, CredentialSource};
pub use domain::ports::{CredentialStrategy, DocumentFetcher, FetchError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::CredentialProvider;
pub use infrastructure::http::HttpDocumentFetcher;
pub use infrastructure::systembolaget::{ApiError, SystembolagetClient};
pub use services::{CatalogError, CatalogService};
