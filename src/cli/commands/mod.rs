//! CLI command implementations.

pub mod config;
pub mod key;
pub mod serve;

use std::sync::Arc;

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::credentials::CredentialProvider;
use crate::infrastructure::http::HttpDocumentFetcher;
use crate::infrastructure::systembolaget::SystembolagetClient;
use crate::services::CatalogService;

/// Credential provider wired to the live website.
pub fn build_provider(config: &Config) -> Result<Arc<CredentialProvider>> {
    let fetcher = Arc::new(HttpDocumentFetcher::new(&config.upstream)?);
    let provider =
        CredentialProvider::from_config(&config.credentials, &config.upstream, fetcher)?;
    Ok(Arc::new(provider))
}

/// Catalog service sharing one credential provider for the process lifetime.
pub fn build_catalog(config: &Config) -> Result<Arc<CatalogService>> {
    let provider = build_provider(config)?;
    let client = Arc::new(SystembolagetClient::new(&config.upstream, provider)?);
    Ok(Arc::new(CatalogService::new(
        client,
        config.output.clone(),
        config.credentials.override_env.clone(),
    )))
}
