use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Where a cached credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    /// Operator-supplied value from the override environment variable.
    Override,
    /// Recovered from the vendor's front-end bundle.
    Extracted,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Extracted => write!(f, "extracted"),
        }
    }
}

/// Opaque API key for the upstream catalog API.
///
/// `Debug` never prints the value; use [`Credential::redacted`] in diagnostics.
#[derive(Clone)]
pub struct Credential {
    value: String,
    source: CredentialSource,
    acquired_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential acquired now.
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: value.into(),
            source,
            acquired_at: Utc::now(),
        }
    }

    /// The raw key, for use in request headers only.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn source(&self) -> CredentialSource {
        self.source
    }

    pub const fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    /// Time elapsed since acquisition.
    pub fn age(&self) -> Duration {
        Utc::now() - self.acquired_at
    }

    /// First four characters followed by an ellipsis.
    pub fn redacted(&self) -> String {
        let prefix: String = self.value.chars().take(4).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("value", &self.redacted())
            .field("source", &self.source)
            .field("acquired_at", &self.acquired_at)
            .finish()
    }
}
