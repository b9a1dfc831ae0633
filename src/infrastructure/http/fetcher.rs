use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient};
use tracing::{debug, instrument};

use crate::domain::models::UpstreamConfig;
use crate::domain::ports::{DocumentFetcher, FetchError};

/// reqwest-backed [`DocumentFetcher`] with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpDocumentFetcher {
    http_client: ReqwestClient,
}

impl HttpDocumentFetcher {
    /// Build a fetcher using the upstream timeout and user agent.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    #[instrument(skip(self))]
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "text/html,application/javascript,*/*")
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(classify)?;
        debug!(bytes = body.len(), "document fetched");
        Ok(body)
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.without_url().to_string())
    }
}
