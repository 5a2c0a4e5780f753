use std::sync::Arc;

use chrono::Utc;
use error_common::{Result, ServiceError};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Account, AccountPatch, NewAccount};
use crate::password::PasswordEncoder;
use crate::repository::AccountRepository;
use crate::token::{TokenCodec, BEARER_PREFIX};

/// The identity service: registration, credential authentication, and
/// token-to-identity resolution. All collaborators are constructor-injected.
pub struct IdentityService {
    accounts: Arc<dyn AccountRepository>,
    encoder: Arc<dyn PasswordEncoder>,
    tokens: Arc<dyn TokenCodec>,
}

impl IdentityService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        encoder: Arc<dyn PasswordEncoder>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            accounts,
            encoder,
            tokens,
        }
    }

    /// Register a new account. The plaintext password is replaced by its
    /// digest before anything reaches the repository. The pre-check here is
    /// an optimization; the repository's uniqueness enforcement is the
    /// authoritative `Conflict` source under concurrent registration.
    pub async fn register(&self, new_account: NewAccount) -> Result<Account> {
        if self.email_exists(&new_account.email).await? {
            return Err(ServiceError::conflict("email already registered"));
        }

        let password_hash = self.encoder.encode(&new_account.password)?;
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            email: new_account.email,
            password_hash,
            name: new_account.name,
            created_at: now,
            updated_at: now,
        };

        let stored = self.accounts.create(&account).await?;
        info!(account_id = %stored.id, email = %stored.email, "account registered");
        Ok(stored)
    }

    /// Whether an email is already taken.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        self.accounts.exists_by_email(email).await
    }

    /// Verify credentials and issue a bearer token whose subject is the
    /// account's email. Unknown email, wrong password, and unverifiable
    /// digests all collapse into the same `Unauthorized` error so the
    /// response never reveals which part failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(ServiceError::invalid_credentials)?;

        if !self.encoder.verify(password, &account.password_hash) {
            debug!(email = %email, "credential verification failed");
            return Err(ServiceError::invalid_credentials());
        }

        let token = self.tokens.issue(&account.email)?;
        info!(account_id = %account.id, "account authenticated");
        Ok(format!("{BEARER_PREFIX}{token}"))
    }

    /// Recover the subject email from a presented bearer token. A missing
    /// scheme prefix, bad signature, or expired token are all authentication
    /// failures.
    pub fn resolve_identity(&self, bearer: &str) -> Result<String> {
        let raw = bearer
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| ServiceError::Unauthorized("missing bearer scheme".to_string()))?;
        self.tokens.subject_of(raw)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Account> {
        self.accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("email not found: {email}")))
    }

    /// Idempotent removal; deleting an absent email is a no-op.
    pub async fn delete_by_email(&self, email: &str) -> Result<()> {
        self.accounts.delete_by_email(email).await?;
        info!(email = %email, "account deleted");
        Ok(())
    }

    /// Apply a partial profile update scoped by the caller's token. Fields
    /// absent from the patch are left untouched; a supplied password is
    /// rehashed before persistence.
    pub async fn update_profile(&self, bearer: &str, patch: AccountPatch) -> Result<Account> {
        let email = self.resolve_identity(bearer)?;

        let mut account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("email not found: {email}")))?;

        if let Some(name) = patch.name {
            account.name = name;
        }
        if let Some(new_email) = patch.email {
            account.email = new_email;
        }
        if let Some(password) = patch.password {
            account.password_hash = self.encoder.encode(&password)?;
        }
        account.updated_at = Utc::now();

        let stored = self.accounts.update(&account).await?;
        info!(account_id = %stored.id, "profile updated");
        Ok(stored)
    }
}
