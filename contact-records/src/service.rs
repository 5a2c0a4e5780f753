use std::sync::Arc;

use chrono::Utc;
use error_common::{Result, ServiceError};
use tracing::info;
use uuid::Uuid;

use crate::models::{Address, AddressPatch, NewAddress, NewPhone, Phone, PhonePatch};
use crate::owner::OwnerResolver;
use crate::repository::{AddressRepository, PhoneRepository};

/// Dependent-record service. Creation is scoped to the authenticated owner
/// resolved from the bearer token; updates go directly by record id.
pub struct ContactService {
    owners: Arc<dyn OwnerResolver>,
    addresses: Arc<dyn AddressRepository>,
    phones: Arc<dyn PhoneRepository>,
}

impl ContactService {
    pub fn new(
        owners: Arc<dyn OwnerResolver>,
        addresses: Arc<dyn AddressRepository>,
        phones: Arc<dyn PhoneRepository>,
    ) -> Self {
        Self {
            owners,
            addresses,
            phones,
        }
    }

    /// Create an address bound to the token's account. The owner id always
    /// comes from the resolved identity, never from the input.
    pub async fn create_address(&self, bearer: &str, input: NewAddress) -> Result<Address> {
        let account_id = self.owners.resolve_owner(bearer).await?;
        let now = Utc::now();
        let address = Address {
            id: Uuid::new_v4(),
            account_id,
            street: input.street,
            number: input.number,
            city: input.city,
            state: input.state,
            postal_code: input.postal_code,
            created_at: now,
            updated_at: now,
        };
        let stored = self.addresses.create(&address).await?;
        info!(address_id = %stored.id, account_id = %account_id, "address created");
        Ok(stored)
    }

    /// Update an address directly by id. No ownership re-check is performed;
    /// anyone holding a valid id may update the record.
    pub async fn update_address(&self, id: Uuid, patch: AddressPatch) -> Result<Address> {
        let mut address = self
            .addresses
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("address not found: {id}")))?;

        if let Some(street) = patch.street {
            address.street = street;
        }
        if let Some(number) = patch.number {
            address.number = number;
        }
        if let Some(city) = patch.city {
            address.city = city;
        }
        if let Some(state) = patch.state {
            address.state = state;
        }
        if let Some(postal_code) = patch.postal_code {
            address.postal_code = postal_code;
        }
        address.updated_at = Utc::now();

        let stored = self.addresses.update(&address).await?;
        info!(address_id = %stored.id, "address updated");
        Ok(stored)
    }

    /// Create a phone bound to the token's account.
    pub async fn create_phone(&self, bearer: &str, input: NewPhone) -> Result<Phone> {
        let account_id = self.owners.resolve_owner(bearer).await?;
        let now = Utc::now();
        let phone = Phone {
            id: Uuid::new_v4(),
            account_id,
            country_code: input.country_code,
            area_code: input.area_code,
            number: input.number,
            created_at: now,
            updated_at: now,
        };
        let stored = self.phones.create(&phone).await?;
        info!(phone_id = %stored.id, account_id = %account_id, "phone created");
        Ok(stored)
    }

    /// Update a phone directly by id, same contract as `update_address`.
    pub async fn update_phone(&self, id: Uuid, patch: PhonePatch) -> Result<Phone> {
        let mut phone = self
            .phones
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("phone not found: {id}")))?;

        if let Some(country_code) = patch.country_code {
            phone.country_code = country_code;
        }
        if let Some(area_code) = patch.area_code {
            phone.area_code = area_code;
        }
        if let Some(number) = patch.number {
            phone.number = number;
        }
        phone.updated_at = Utc::now();

        let stored = self.phones.update(&phone).await?;
        info!(phone_id = %stored.id, "phone updated");
        Ok(stored)
    }
}
