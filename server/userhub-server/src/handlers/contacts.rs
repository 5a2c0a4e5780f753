use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use contact_records::{Address, AddressPatch, NewAddress, NewPhone, Phone, PhonePatch};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::handlers::bearer_from;
use crate::server::UserHubServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_required};

/// Address creation request. The owning account is derived from the bearer
/// token; no account id is accepted here.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAddressRequest {
    #[schema(example = "Av. Paulista")]
    pub street: String,
    #[schema(example = "1578")]
    pub number: String,
    #[schema(example = "Sao Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,
    #[schema(example = "01310200")]
    pub postal_code: String,
}

impl RequestValidation for CreateAddressRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.street, "Street is required");
        validate_required!(self.city, "City is required");
        validate_required!(self.state, "State is required");
        validate_required!(self.postal_code, "Postal code is required");
        Ok(())
    }
}

/// Phone creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePhoneRequest {
    #[schema(example = "55")]
    pub country_code: String,
    #[schema(example = "11")]
    pub area_code: String,
    #[schema(example = "987654321")]
    pub number: String,
}

impl RequestValidation for CreatePhoneRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.country_code, "Country code is required");
        validate_required!(self.area_code, "Area code is required");
        validate_required!(self.number, "Number is required");
        Ok(())
    }
}

/// Record id query parameter for direct updates
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Uuid,
}

/// Create an address owned by the authenticated caller
#[utoipa::path(
    post,
    path = "/api/v1/users/addresses",
    tag = "contacts",
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address created for the token owner", body = Address),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_token" = []))
)]
pub async fn create_address(
    State(server): State<UserHubServer>,
    headers: HeaderMap,
    Json(request): Json<CreateAddressRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Address>>), ApiError> {
    request.validate()?;
    let bearer = bearer_from(&headers)?;

    let address = server
        .contacts
        .create_address(
            bearer,
            NewAddress {
                street: request.street,
                number: request.number,
                city: request.city,
                state: request.state,
                postal_code: request.postal_code,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(api_success(address))))
}

/// Update an address directly by id
#[utoipa::path(
    put,
    path = "/api/v1/users/addresses",
    tag = "contacts",
    params(
        ("id" = Uuid, Query, description = "Id of the address to update")
    ),
    request_body = AddressPatch,
    responses(
        (status = 200, description = "Address updated", body = Address),
        (status = 404, description = "No address with this id")
    )
)]
pub async fn update_address(
    State(server): State<UserHubServer>,
    Query(query): Query<IdQuery>,
    Json(patch): Json<AddressPatch>,
) -> Result<Json<ApiResponse<Address>>, ApiError> {
    let address = server.contacts.update_address(query.id, patch).await?;
    Ok(Json(api_success(address)))
}

/// Create a phone owned by the authenticated caller
#[utoipa::path(
    post,
    path = "/api/v1/users/phones",
    tag = "contacts",
    request_body = CreatePhoneRequest,
    responses(
        (status = 201, description = "Phone created for the token owner", body = Phone),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_token" = []))
)]
pub async fn create_phone(
    State(server): State<UserHubServer>,
    headers: HeaderMap,
    Json(request): Json<CreatePhoneRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Phone>>), ApiError> {
    request.validate()?;
    let bearer = bearer_from(&headers)?;

    let phone = server
        .contacts
        .create_phone(
            bearer,
            NewPhone {
                country_code: request.country_code,
                area_code: request.area_code,
                number: request.number,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(api_success(phone))))
}

/// Update a phone directly by id
#[utoipa::path(
    put,
    path = "/api/v1/users/phones",
    tag = "contacts",
    params(
        ("id" = Uuid, Query, description = "Id of the phone to update")
    ),
    request_body = PhonePatch,
    responses(
        (status = 200, description = "Phone updated", body = Phone),
        (status = 404, description = "No phone with this id")
    )
)]
pub async fn update_phone(
    State(server): State<UserHubServer>,
    Query(query): Query<IdQuery>,
    Json(patch): Json<PhonePatch>,
) -> Result<Json<ApiResponse<Phone>>, ApiError> {
    let phone = server.contacts.update_phone(query.id, patch).await?;
    Ok(Json(api_success(phone)))
}
