use async_trait::async_trait;

use crate::domain::errors::CredentialError;
use crate::domain::models::Credential;

/// One way of obtaining an API credential.
///
/// Strategies are evaluated in order by the credential provider:
/// - `Ok(Some(_))` ends evaluation with a credential
/// - `Ok(None)` means the strategy does not apply and the next one runs
/// - `Err(_)` ends evaluation with that failure
#[async_trait]
pub trait CredentialStrategy: Send + Sync {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    async fn attempt(&self) -> Result<Option<Credential>, CredentialError>;
}
