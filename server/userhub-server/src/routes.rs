use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{contacts, health, postal, users};
use crate::server::UserHubServer;

pub mod paths {
    pub mod health {
        pub const HEALTH: &str = "/health";
    }

    pub mod api_v1 {
        pub const USERS: &str = "/api/v1/users";
        pub const USERS_LOGIN: &str = "/api/v1/users/login";
        pub const ADDRESSES: &str = "/api/v1/users/addresses";
        pub const PHONES: &str = "/api/v1/users/phones";
        pub const POSTAL_LOOKUP: &str = "/api/v1/postal/:code";
        pub const OPENAPI_JSON: &str = "/api/docs/openapi.json";
    }
}

/// Create health check routes
pub fn health_routes() -> Router<UserHubServer> {
    Router::new().route(paths::health::HEALTH, get(health::health_check))
}

/// Create account routes
pub fn user_routes() -> Router<UserHubServer> {
    Router::new()
        .route(paths::api_v1::USERS, post(users::register))
        .route(paths::api_v1::USERS, get(users::get_account))
        .route(paths::api_v1::USERS, delete(users::delete_account))
        .route(paths::api_v1::USERS, patch(users::update_account))
        .route(paths::api_v1::USERS_LOGIN, post(users::login))
}

/// Create address and phone routes
pub fn contact_routes() -> Router<UserHubServer> {
    Router::new()
        .route(paths::api_v1::ADDRESSES, post(contacts::create_address))
        .route(paths::api_v1::ADDRESSES, put(contacts::update_address))
        .route(paths::api_v1::PHONES, post(contacts::create_phone))
        .route(paths::api_v1::PHONES, put(contacts::update_phone))
}

/// Create postal lookup routes
pub fn postal_routes() -> Router<UserHubServer> {
    Router::new().route(paths::api_v1::POSTAL_LOOKUP, get(postal::lookup_postal_code))
}

/// Compose all route groups
pub fn create_routes() -> Router<UserHubServer> {
    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(contact_routes())
        .merge(postal_routes())
        .route(
            paths::api_v1::OPENAPI_JSON,
            get(crate::openapi::openapi_json),
        )
}
