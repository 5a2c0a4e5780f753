use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{contacts, health, postal, users};

/// OpenAPI document for the UserHub API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "UserHub Engine API",
        description = "Account registration, authentication, owner-scoped contact records, and postal lookup",
    ),
    paths(
        health::health_check,
        users::register,
        users::login,
        users::get_account,
        users::delete_account,
        users::update_account,
        contacts::create_address,
        contacts::update_address,
        contacts::create_phone,
        contacts::update_phone,
        postal::lookup_postal_code,
    ),
    components(schemas(
        health::HealthResponse,
        users::RegisterRequest,
        users::LoginRequest,
        users::LoginResponse,
        users::AccountResponse,
        auth_identity::AccountPatch,
        contacts::CreateAddressRequest,
        contacts::CreatePhoneRequest,
        contact_records::Address,
        contact_records::AddressPatch,
        contact_records::Phone,
        contact_records::PhonePatch,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "users", description = "Account management"),
        (name = "contacts", description = "Owner-scoped addresses and phones"),
        (name = "postal", description = "Postal code lookup"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
