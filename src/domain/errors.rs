//! Domain errors for the Systembolaget MCP server.

use std::fmt;

use thiserror::Error;

use crate::domain::ports::FetchError;

/// Which document the extraction pipeline was fetching when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// The vendor website root document.
    SiteRoot,
    /// The generated application bundle referenced by the root document.
    Bundle,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SiteRoot => write!(f, "site root"),
            Self::Bundle => write!(f, "bundle"),
        }
    }
}

/// Failure to obtain an API credential by any path.
///
/// None of the variants carry a raw response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("bundle reference not found")]
    BundleReferenceNotFound,

    #[error("key pattern not found in bundle")]
    KeyPatternNotFound,

    #[error("invalid bundle URL '{reference}': {reason}")]
    InvalidBundleUrl { reference: String, reason: String },

    #[error("network error fetching {stage}: {message}")]
    Network { stage: FetchStage, message: String },

    #[error("timed out fetching {stage}")]
    Timeout { stage: FetchStage },

    #[error("unexpected HTTP status {status} fetching {stage}")]
    UnexpectedStatus { stage: FetchStage, status: u16 },

    #[error("no credential source produced a key")]
    NoSource,
}

impl CredentialError {
    /// Attach the pipeline stage to a fetch failure.
    pub fn from_fetch(stage: FetchStage, err: FetchError) -> Self {
        match err {
            FetchError::Timeout => Self::Timeout { stage },
            FetchError::Status(status) => Self::UnexpectedStatus { stage, status },
            FetchError::Network(message) => Self::Network { stage, message },
        }
    }

    /// The stage that failed, when the failure came from a fetch.
    pub const fn stage(&self) -> Option<FetchStage> {
        match self {
            Self::Network { stage, .. }
            | Self::Timeout { stage }
            | Self::UnexpectedStatus { stage, .. } => Some(*stage),
            Self::BundleReferenceNotFound
            | Self::KeyPatternNotFound
            | Self::InvalidBundleUrl { .. }
            | Self::NoSource => None,
        }
    }
}

/// Tool parameters that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fetch_keeps_stage() {
        let err = CredentialError::from_fetch(FetchStage::Bundle, FetchError::Status(503));
        assert_eq!(
            err,
            CredentialError::UnexpectedStatus {
                stage: FetchStage::Bundle,
                status: 503
            }
        );
        assert_eq!(err.stage(), Some(FetchStage::Bundle));
        assert_eq!(err.to_string(), "unexpected HTTP status 503 fetching bundle");
    }

    #[test]
    fn test_timeout_message_names_stage() {
        let err = CredentialError::from_fetch(FetchStage::SiteRoot, FetchError::Timeout);
        assert_eq!(err.to_string(), "timed out fetching site root");
    }

    #[test]
    fn test_pattern_failures_have_no_stage() {
        assert_eq!(CredentialError::BundleReferenceNotFound.stage(), None);
        assert_eq!(
            CredentialError::KeyPatternNotFound.to_string(),
            "key pattern not found in bundle"
        );
    }
}
