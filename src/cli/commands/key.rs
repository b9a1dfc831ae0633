//! Implementation of the `key` command.

use anyhow::{Context, Result};
use serde::Serialize;

use super::build_provider;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, CredentialSource};

#[derive(Debug, Serialize)]
pub struct KeyOutput {
    pub source: CredentialSource,
    /// Only a prefix of the key is ever printed
    pub key: String,
    pub acquired_at: chrono::DateTime<chrono::Utc>,
}

impl CommandOutput for KeyOutput {
    fn to_human(&self) -> String {
        let origin = match self.source {
            CredentialSource::Override => "environment override",
            CredentialSource::Extracted => "extracted from website bundle",
        };
        format!("API key: {} ({origin})", self.key)
    }
}

pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let provider = build_provider(config)?;
    let credential = provider.acquire_credential().await.with_context(|| {
        format!(
            "Could not obtain API key. Set {} to bypass automatic extraction",
            config.credentials.override_env
        )
    })?;

    let result = KeyOutput {
        source: credential.source(),
        key: credential.redacted(),
        acquired_at: credential.acquired_at(),
    };
    output(&result, json_mode);
    Ok(())
}
