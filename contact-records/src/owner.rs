use async_trait::async_trait;
use auth_identity::IdentityService;
use error_common::{Result, ServiceError};
use uuid::Uuid;

/// Resolves a bearer token to the owning account's id. Fails `NotFound`
/// when the token's subject no longer maps to an account.
#[async_trait]
pub trait OwnerResolver: Send + Sync {
    async fn resolve_owner(&self, bearer: &str) -> Result<Uuid>;
}

#[async_trait]
impl OwnerResolver for IdentityService {
    async fn resolve_owner(&self, bearer: &str) -> Result<Uuid> {
        let email = self.resolve_identity(bearer)?;
        let account = self.find_by_email(&email).await.map_err(|err| match err {
            ServiceError::NotFound(_) => {
                ServiceError::not_found(format!("no account for token subject: {email}"))
            }
            other => other,
        })?;
        Ok(account.id)
    }
}
