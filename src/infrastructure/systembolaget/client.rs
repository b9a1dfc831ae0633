//! HTTP client for the Systembolaget e-commerce API.
//!
//! Every request asks the [`CredentialProvider`] for the API key first and
//! sends it in the `Ocp-Apim-Subscription-Key` header. Requests are single
//! attempts; status codes are mapped to [`ApiError`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client as ReqwestClient, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::errors::ApiError;
use crate::domain::models::{Credential, CredentialSource, UpstreamConfig};
use crate::infrastructure::credentials::CredentialProvider;

/// Header the API gateway reads the subscription key from.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Query parameters as sent to the API.
pub type Query = Vec<(&'static str, String)>;

/// Client for the product search, product, store search and store endpoints.
pub struct SystembolagetClient {
    http_client: ReqwestClient,
    base_url: Url,
    origin: String,
    credentials: Arc<CredentialProvider>,
}

impl SystembolagetClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig, credentials: Arc<CredentialProvider>) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .pool_max_idle_per_host(10)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", config.api_base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot be a base: {}", config.api_base_url);
        }

        Ok(Self {
            http_client,
            base_url,
            origin: config.website_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// `GET /productsearch/search`
    pub async fn search_products(&self, query: Query) -> Result<Value, ApiError> {
        self.get_json(&["productsearch", "search"], &query, false)
            .await
    }

    /// `GET /product/{product_number}`
    pub async fn get_product(&self, product_number: &str) -> Result<Value, ApiError> {
        self.get_json(&["product", product_number], &[], false).await
    }

    /// `GET /sitesearch/site`
    ///
    /// The store search endpoint rejects requests without the website `Origin`.
    pub async fn search_stores(&self, search_term: Option<&str>) -> Result<Value, ApiError> {
        let mut query: Query = vec![("includePredictions", "true".to_string())];
        if let Some(term) = search_term {
            query.push(("q", term.to_string()));
        }
        self.get_json(&["sitesearch", "site"], &query, true).await
    }

    /// `GET /site/{store_id}`
    pub async fn get_store(&self, store_id: &str) -> Result<Value, ApiError> {
        self.get_json(&["site", store_id], &[], false).await
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[instrument(skip(self, query), fields(path = %segments.join("/")))]
    async fn get_json(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
        with_origin: bool,
    ) -> Result<Value, ApiError> {
        let credential = self.credentials.acquire_credential().await?;

        let mut request = self
            .http_client
            .get(self.endpoint(segments))
            .header(SUBSCRIPTION_KEY_HEADER, credential.value())
            .header(header::ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if with_origin {
            request = request.header(header::ORIGIN, &self.origin);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        debug!(status = status.as_u16(), "API response");

        if status == StatusCode::FORBIDDEN {
            return Err(self.handle_forbidden(&credential).await);
        }
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(ApiError::from_transport)
    }

    /// An extracted key may have been rotated by the vendor; drop it so the
    /// next call re-extracts. Override keys are left alone, as is a key that
    /// replaced the rejected one while this request was in flight.
    async fn handle_forbidden(&self, credential: &Credential) -> ApiError {
        match credential.source() {
            CredentialSource::Extracted => {
                warn!("API returned 403 for extracted key, invalidating cache");
                self.credentials.invalidate_if(credential.value()).await;
                ApiError::ForbiddenKeyDiscarded
            }
            CredentialSource::Override => {
                warn!("API returned 403 for override key");
                ApiError::Forbidden
            }
        }
    }
}
