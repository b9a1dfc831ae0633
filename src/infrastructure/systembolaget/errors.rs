use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::CredentialError;

/// Errors that can occur when calling the Systembolaget e-commerce API
///
/// Every variant is a single-attempt outcome; nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No API key could be obtained
    #[error("Could not obtain API key: {0}")]
    Credential(#[from] CredentialError),

    /// Resource not found (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// Forbidden with an operator-supplied key (HTTP 403)
    #[error("Access forbidden. Check API key configuration")]
    Forbidden,

    /// Forbidden with an extracted key, which has been discarded (HTTP 403)
    #[error("Access forbidden. The cached API key was discarded - please retry")]
    ForbiddenKeyDiscarded,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded. Please try again later")]
    RateLimited,

    /// Server error from the API (HTTP 5xx)
    #[error("Systembolaget API is currently unavailable (HTTP {0})")]
    Unavailable(u16),

    /// Any other non-success status
    #[error("API request failed with status {0}")]
    UnexpectedStatus(u16),

    /// Request timeout
    #[error("Request timed out. Please try again")]
    Timeout,

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("Failed to parse API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success status other than 403 to its error class.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            s if s.is_server_error() => Self::Unavailable(s.as_u16()),
            s => Self::UnexpectedStatus(s.as_u16()),
        }
    }

    /// Map a transport failure, dropping the URL from the message.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.without_url().to_string())
        } else {
            Self::Network(err.without_url().to_string())
        }
    }

    /// Returns true if the failure is about the API key rather than the request
    pub const fn is_credential_problem(&self) -> bool {
        matches!(
            self,
            Self::Credential(_) | Self::Forbidden | Self::ForbiddenKeyDiscarded
        )
    }
}
