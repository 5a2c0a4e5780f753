use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A postal address owned by an account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub account_id: Uuid,
    pub street: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A phone number owned by an account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Phone {
    pub id: Uuid,
    pub account_id: Uuid,
    pub country_code: String,
    pub area_code: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Address creation input. The owning account comes from the caller's
/// token, so no account id appears here.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAddress {
    pub street: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPhone {
    pub country_code: String,
    pub area_code: String,
    pub number: String,
}

/// Partial address update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PhonePatch {
    pub country_code: Option<String>,
    pub area_code: Option<String>,
    pub number: Option<String>,
}
