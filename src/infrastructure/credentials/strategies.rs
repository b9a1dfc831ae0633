//! Credential strategies, evaluated in order by [`CredentialProvider`].
//!
//! [`CredentialProvider`]: super::CredentialProvider

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, instrument};

use super::extraction::{locate_bundle_reference, resolve_bundle_url, BundleKeyPattern};
use crate::domain::errors::{CredentialError, FetchStage};
use crate::domain::models::{Credential, CredentialSource};
use crate::domain::ports::{CredentialStrategy, DocumentFetcher};

/// Operator-supplied key from an environment variable.
///
/// The value is used verbatim. Declines when the variable is unset, empty,
/// or not valid unicode.
#[derive(Debug, Clone)]
pub struct EnvOverrideStrategy {
    var_name: String,
}

impl EnvOverrideStrategy {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

#[async_trait]
impl CredentialStrategy for EnvOverrideStrategy {
    fn name(&self) -> &'static str {
        "env_override"
    }

    async fn attempt(&self) -> Result<Option<Credential>, CredentialError> {
        let value = std::env::var(&self.var_name).unwrap_or_default();
        if value.is_empty() {
            debug!(var = %self.var_name, "override variable not set");
            return Ok(None);
        }

        info!(var = %self.var_name, "using API key from environment variable");
        Ok(Some(Credential::new(value, CredentialSource::Override)))
    }
}

/// Recovers the key the vendor's own front end embeds in its `_app` bundle.
pub struct BundleExtractionStrategy {
    fetcher: Arc<dyn DocumentFetcher>,
    website: Url,
    key_pattern: BundleKeyPattern,
}

impl BundleExtractionStrategy {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        website: Url,
        key_pattern: BundleKeyPattern,
    ) -> Self {
        Self {
            fetcher,
            website,
            key_pattern,
        }
    }
}

#[async_trait]
impl CredentialStrategy for BundleExtractionStrategy {
    fn name(&self) -> &'static str {
        "bundle_extraction"
    }

    #[instrument(skip(self), fields(website = %self.website))]
    async fn attempt(&self) -> Result<Option<Credential>, CredentialError> {
        info!("extracting API key from website bundle");

        let html = self
            .fetcher
            .fetch_text(self.website.as_str())
            .await
            .map_err(|e| CredentialError::from_fetch(FetchStage::SiteRoot, e))?;

        let reference =
            locate_bundle_reference(&html).ok_or(CredentialError::BundleReferenceNotFound)?;
        let bundle_url = resolve_bundle_url(&self.website, reference)?;
        debug!(bundle = %bundle_url, "found app bundle reference");

        let bundle = self
            .fetcher
            .fetch_text(bundle_url.as_str())
            .await
            .map_err(|e| CredentialError::from_fetch(FetchStage::Bundle, e))?;

        let key = self
            .key_pattern
            .locate(&bundle)
            .ok_or(CredentialError::KeyPatternNotFound)?;

        Ok(Some(Credential::new(key, CredentialSource::Extracted)))
    }
}
