//! Common test utilities for integration tests
//!
//! Fixtures for the website (root page and app bundle) and helpers that
//! wire a credential provider and API client against mockito servers.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use systembolaget_mcp::domain::models::{CredentialsConfig, OutputConfig, UpstreamConfig};
use systembolaget_mcp::{
    CatalogService, Credential, CredentialError, CredentialProvider, CredentialSource,
    CredentialStrategy, HttpDocumentFetcher, SystembolagetClient,
};

/// Path the root page references for the app bundle.
pub const BUNDLE_PATH: &str = "/_next/static/chunks/pages/_app-4f2a9c1d.js";

/// Key embedded in [`bundle_js`].
pub const EXTRACTED_KEY: &str = "8d39a7340ee7439f8b4c1e995c8f3e4a";

/// Environment variable no test ever sets, so the override strategy declines.
pub const UNSET_OVERRIDE_ENV: &str = "SYSTEMBOLAGET_MCP_TEST_NEVER_SET";

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn root_html() -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<script src="/_next/static/chunks/webpack-11aa.js" defer=""></script>
<script src="{BUNDLE_PATH}" defer=""></script>
</head><body><div id="__next"></div></body></html>"#
    )
}

pub fn bundle_js() -> String {
    format!(
        r#"(self.webpackChunk=self.webpackChunk||[]).push([[888],{{1:function(e,t,n){{var r={{NEXT_PUBLIC_APP_ENV:"production",NEXT_PUBLIC_API_KEY_APIM:"{EXTRACTED_KEY}",NEXT_PUBLIC_SITE:"se"}}}}}}]);"#
    )
}

pub fn upstream_for(website: &str, api: &str) -> UpstreamConfig {
    UpstreamConfig {
        website_url: website.to_string(),
        api_base_url: api.to_string(),
        timeout_secs: 5,
        ..Default::default()
    }
}

/// Provider with the standard strategy list against `website`.
pub fn extracting_provider(website: &str) -> Arc<CredentialProvider> {
    let upstream = upstream_for(website, "http://unused.invalid");
    let credentials = CredentialsConfig {
        override_env: UNSET_OVERRIDE_ENV.to_string(),
        ..Default::default()
    };
    let fetcher = Arc::new(HttpDocumentFetcher::new(&upstream).expect("fetcher"));
    Arc::new(CredentialProvider::from_config(&credentials, &upstream, fetcher).expect("provider"))
}

/// Strategy that always yields a fixed key, standing in for an env override.
pub struct FixedKey(pub &'static str, pub CredentialSource);

#[async_trait]
impl CredentialStrategy for FixedKey {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn attempt(&self) -> Result<Option<Credential>, CredentialError> {
        Ok(Some(Credential::new(self.0, self.1)))
    }
}

pub fn fixed_provider(key: &'static str, source: CredentialSource) -> Arc<CredentialProvider> {
    Arc::new(CredentialProvider::new(vec![Box::new(FixedKey(key, source))]))
}

pub fn catalog_for(api: &str, provider: Arc<CredentialProvider>) -> CatalogService {
    let upstream = upstream_for("https://www.systembolaget.se", api);
    let client = Arc::new(SystembolagetClient::new(&upstream, provider).expect("client"));
    CatalogService::new(
        client,
        OutputConfig::default(),
        "SYSTEMBOLAGET_API_KEY".to_string(),
    )
}
