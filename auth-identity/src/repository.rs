use async_trait::async_trait;
use dashmap::DashMap;
use error_common::{Result, ServiceError};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use crate::models::Account;

/// Persistence port for accounts. Email uniqueness is enforced here, at the
/// storage boundary, not by the service-level pre-check: `create` and
/// `update` return `Conflict` when an email is already taken.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: &Account) -> Result<Account>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;
    async fn exists_by_email(&self, email: &str) -> Result<bool>;
    async fn update(&self, account: &Account) -> Result<Account>;
    /// Idempotent: deleting an absent email is a no-op.
    async fn delete_by_email(&self, email: &str) -> Result<()>;
}

/// Translate sqlx failures, treating a unique-constraint violation as the
/// authoritative duplicate-email signal.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> ServiceError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_unique_violation() {
            return ServiceError::conflict("email already registered");
        }
    }
    ServiceError::database(err.to_string())
}

// =============================================================================
// POSTGRES IMPLEMENTATION
// =============================================================================

#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: Pool<Postgres>,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: &Account) -> Result<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, email, password_hash, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, password_hash, name, created_at, updated_at
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.name)
        .bind(account.created_at)
        .bind(account.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        Ok(exists.0)
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET email = $2, password_hash = $3, name = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, email, password_hash, name, created_at, updated_at
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.name)
        .bind(account.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_by_email(&self, email: &str) -> Result<()> {
        sqlx::query("DELETE FROM accounts WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

// =============================================================================
// IN-MEMORY IMPLEMENTATION (development and tests)
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<Uuid, Account>,
    emails: DashMap<String, Uuid>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> Result<Account> {
        if self.emails.contains_key(&account.email) {
            return Err(ServiceError::conflict("email already registered"));
        }
        self.emails.insert(account.email.clone(), account.id);
        self.accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let Some(id) = self.emails.get(email).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.emails.contains_key(email))
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        let mut stored = self
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| ServiceError::not_found(format!("account {}", account.id)))?;
        if stored.email != account.email {
            if self.emails.contains_key(&account.email) {
                return Err(ServiceError::conflict("email already registered"));
            }
            self.emails.remove(&stored.email);
            self.emails.insert(account.email.clone(), account.id);
        }
        *stored = account.clone();
        Ok(account.clone())
    }

    async fn delete_by_email(&self, email: &str) -> Result<()> {
        if let Some((_, id)) = self.emails.remove(email) {
            self.accounts.remove(&id);
        }
        Ok(())
    }
}
