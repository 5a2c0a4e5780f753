use async_trait::async_trait;
use dashmap::DashMap;
use error_common::{Result, ServiceError};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use crate::models::{Address, Phone};

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn create(&self, address: &Address) -> Result<Address>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>>;
    async fn update(&self, address: &Address) -> Result<Address>;
}

#[async_trait]
pub trait PhoneRepository: Send + Sync {
    async fn create(&self, phone: &Phone) -> Result<Phone>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Phone>>;
    async fn update(&self, phone: &Phone) -> Result<Phone>;
}

fn map_sqlx_error(err: sqlx::Error) -> ServiceError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_foreign_key_violation() {
            return ServiceError::not_found("owning account does not exist");
        }
    }
    ServiceError::database(err.to_string())
}

// =============================================================================
// POSTGRES IMPLEMENTATIONS
// =============================================================================

#[derive(Debug, Clone)]
pub struct PostgresAddressRepository {
    pool: Pool<Postgres>,
}

impl PostgresAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn create(&self, address: &Address) -> Result<Address> {
        sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (id, account_id, street, number, city, state, postal_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, account_id, street, number, city, state, postal_code, created_at, updated_at
            "#,
        )
        .bind(address.id)
        .bind(address.account_id)
        .bind(&address.street)
        .bind(&address.number)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(address.created_at)
        .bind(address.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>> {
        sqlx::query_as::<_, Address>(
            r#"
            SELECT id, account_id, street, number, city, state, postal_code, created_at, updated_at
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn update(&self, address: &Address) -> Result<Address> {
        sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET street = $2, number = $3, city = $4, state = $5, postal_code = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, account_id, street, number, city, state, postal_code, created_at, updated_at
            "#,
        )
        .bind(address.id)
        .bind(&address.street)
        .bind(&address.number)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(address.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

#[derive(Debug, Clone)]
pub struct PostgresPhoneRepository {
    pool: Pool<Postgres>,
}

impl PostgresPhoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhoneRepository for PostgresPhoneRepository {
    async fn create(&self, phone: &Phone) -> Result<Phone> {
        sqlx::query_as::<_, Phone>(
            r#"
            INSERT INTO phones (id, account_id, country_code, area_code, number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, account_id, country_code, area_code, number, created_at, updated_at
            "#,
        )
        .bind(phone.id)
        .bind(phone.account_id)
        .bind(&phone.country_code)
        .bind(&phone.area_code)
        .bind(&phone.number)
        .bind(phone.created_at)
        .bind(phone.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Phone>> {
        sqlx::query_as::<_, Phone>(
            r#"
            SELECT id, account_id, country_code, area_code, number, created_at, updated_at
            FROM phones
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn update(&self, phone: &Phone) -> Result<Phone> {
        sqlx::query_as::<_, Phone>(
            r#"
            UPDATE phones
            SET country_code = $2, area_code = $3, number = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, account_id, country_code, area_code, number, created_at, updated_at
            "#,
        )
        .bind(phone.id)
        .bind(&phone.country_code)
        .bind(&phone.area_code)
        .bind(&phone.number)
        .bind(phone.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

// =============================================================================
// IN-MEMORY IMPLEMENTATIONS (development and tests)
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryAddressRepository {
    records: DashMap<Uuid, Address>,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn create(&self, address: &Address) -> Result<Address> {
        self.records.insert(address.id, address.clone());
        Ok(address.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, address: &Address) -> Result<Address> {
        let mut stored = self
            .records
            .get_mut(&address.id)
            .ok_or_else(|| ServiceError::not_found(format!("address {}", address.id)))?;
        *stored = address.clone();
        Ok(address.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPhoneRepository {
    records: DashMap<Uuid, Phone>,
}

impl InMemoryPhoneRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PhoneRepository for InMemoryPhoneRepository {
    async fn create(&self, phone: &Phone) -> Result<Phone> {
        self.records.insert(phone.id, phone.clone());
        Ok(phone.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Phone>> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, phone: &Phone) -> Result<Phone> {
        let mut stored = self
            .records
            .get_mut(&phone.id)
            .ok_or_else(|| ServiceError::not_found(format!("phone {}", phone.id)))?;
        *stored = phone.clone();
        Ok(phone.clone())
    }
}
