use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Duration;
use reqwest::Url;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::extraction::BundleKeyPattern;
use super::strategies::{BundleExtractionStrategy, EnvOverrideStrategy};
use crate::domain::errors::CredentialError;
use crate::domain::models::{Credential, CredentialsConfig, UpstreamConfig};
use crate::domain::ports::{CredentialStrategy, DocumentFetcher};

/// Produces the API key for the upstream catalog API.
///
/// Strategies run in order on a cache miss; the first one that yields a
/// credential wins and its result is cached in a single slot owned by the
/// provider. A failing strategy stops evaluation and leaves the slot empty,
/// so the next call starts over.
///
/// At most one acquisition is in flight: callers that miss the cache queue on
/// the acquisition lock and re-check the slot once they hold it.
pub struct CredentialProvider {
    strategies: Vec<Box<dyn CredentialStrategy>>,
    slot: RwLock<Option<Credential>>,
    acquisition: Mutex<()>,
    ttl: Option<Duration>,
}

impl CredentialProvider {
    /// Create a provider with an empty cache and no expiry.
    pub fn new(strategies: Vec<Box<dyn CredentialStrategy>>) -> Self {
        Self {
            strategies,
            slot: RwLock::new(None),
            acquisition: Mutex::new(()),
            ttl: None,
        }
    }

    /// Expire cached credentials older than `ttl`.
    #[must_use]
    pub fn with_ttl(mut self, ttl: std::time::Duration) -> Self {
        self.ttl = Some(Duration::from_std(ttl).unwrap_or(Duration::MAX));
        self
    }

    /// Build the standard strategy list: environment override, then bundle
    /// extraction from the configured website.
    pub fn from_config(
        credentials: &CredentialsConfig,
        upstream: &UpstreamConfig,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> Result<Self> {
        let website = Url::parse(&upstream.website_url)
            .with_context(|| format!("Invalid website URL: {}", upstream.website_url))?;
        let key_pattern = BundleKeyPattern::new(&credentials.key_constant)
            .with_context(|| format!("Invalid key constant: {}", credentials.key_constant))?;

        let strategies: Vec<Box<dyn CredentialStrategy>> = vec![
            Box::new(EnvOverrideStrategy::new(&credentials.override_env)),
            Box::new(BundleExtractionStrategy::new(fetcher, website, key_pattern)),
        ];

        let provider = Self::new(strategies);
        Ok(match credentials.cache_ttl_secs {
            Some(secs) => provider.with_ttl(std::time::Duration::from_secs(secs)),
            None => provider,
        })
    }

    /// Return the cached credential, acquiring one first on a miss.
    pub async fn acquire_credential(&self) -> Result<Credential, CredentialError> {
        if let Some(credential) = self.cached().await {
            return Ok(credential);
        }

        let _guard = self.acquisition.lock().await;

        // Another caller may have filled the slot while we waited.
        if let Some(credential) = self.cached().await {
            debug!("reusing credential acquired by concurrent caller");
            return Ok(credential);
        }

        for strategy in &self.strategies {
            match strategy.attempt().await {
                Ok(Some(credential)) => {
                    info!(
                        strategy = strategy.name(),
                        source = %credential.source(),
                        key = %credential.redacted(),
                        "API key acquired and cached"
                    );
                    *self.slot.write().await = Some(credential.clone());
                    return Ok(credential);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(strategy = strategy.name(), error = %err, "API key acquisition failed");
                    return Err(err);
                }
            }
        }

        Err(CredentialError::NoSource)
    }

    /// The cached credential, if present and not expired.
    pub async fn cached(&self) -> Option<Credential> {
        let slot = self.slot.read().await;
        let credential = slot.as_ref()?;
        if let Some(ttl) = self.ttl {
            let age = credential.age();
            if age >= ttl {
                debug!(age_secs = age.num_seconds(), "cached API key expired");
                return None;
            }
        }
        Some(credential.clone())
    }

    /// Drop the cached credential so the next call acquires a fresh one.
    pub async fn invalidate(&self) {
        if self.slot.write().await.take().is_some() {
            info!("API key cache invalidated");
        }
    }

    /// Drop the cached credential only if it still holds `value`.
    ///
    /// Returns whether the slot was cleared. A rejection reported for a key
    /// that has since been replaced leaves the newer key in place.
    pub async fn invalidate_if(&self, value: &str) -> bool {
        let mut slot = self.slot.write().await;
        match slot.as_ref() {
            Some(current) if current.value() == value => {
                *slot = None;
                info!("API key cache invalidated");
                true
            }
            Some(_) => {
                debug!("rejected API key already replaced, keeping cache");
                false
            }
            None => false,
        }
    }
}
