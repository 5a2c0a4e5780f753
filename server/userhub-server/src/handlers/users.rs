use auth_identity::{Account, AccountPatch, NewAccount};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::handlers::bearer_from;
use crate::server::UserHubServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_length, validate_required};

/// Account registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Email address, the account's natural key
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Plaintext password, hashed before persistence
    #[schema(example = "s3cret-pass")]
    pub password: String,
    /// Display name
    #[schema(example = "Ana Souza")]
    pub name: String,
}

impl RequestValidation for RegisterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.email, "Email is required");
        validate_field!(self.email, self.email.contains('@'), "Invalid email format");
        validate_required!(self.name, "Name is required");
        validate_length!(
            self.password,
            8,
            128,
            "Password must be between 8 and 128 characters"
        );
        Ok(())
    }
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "s3cret-pass")]
    pub password: String,
}

impl RequestValidation for LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.email, "Email is required");
        validate_required!(self.password, "Password is required");
        Ok(())
    }
}

/// Login response: the issued credential, already carrying the
/// `"Bearer "` scheme marker
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Bearer eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
}

/// Outward-facing view of an account. The password digest never appears
/// here.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: Uuid,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "Ana Souza")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Email query parameter for lookup and deletion
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account registered", body = AccountResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(server): State<UserHubServer>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponse>>), ApiError> {
    request.validate()?;

    let account = server
        .identity
        .register(NewAccount {
            email: request.email,
            password: request.password,
            name: request.name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(api_success(AccountResponse::from(account))),
    ))
}

/// Authenticate and obtain a bearer token
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authentication successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(server): State<UserHubServer>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    request.validate()?;

    let token = server
        .identity
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(api_success(LoginResponse { token })))
}

/// Fetch an account by email
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    params(
        ("email" = String, Query, description = "Email of the account to fetch", example = "ana@example.com")
    ),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "No account with this email")
    )
)]
pub async fn get_account(
    State(server): State<UserHubServer>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = server.identity.find_by_email(&query.email).await?;
    Ok(Json(api_success(AccountResponse::from(account))))
}

/// Delete an account by email. Idempotent: deleting an absent email
/// answers 204 as well.
#[utoipa::path(
    delete,
    path = "/api/v1/users",
    tag = "users",
    params(
        ("email" = String, Query, description = "Email of the account to delete", example = "ana@example.com")
    ),
    responses(
        (status = 204, description = "Account deleted, or was already absent")
    )
)]
pub async fn delete_account(
    State(server): State<UserHubServer>,
    Query(query): Query<EmailQuery>,
) -> Result<StatusCode, ApiError> {
    server.identity.delete_by_email(&query.email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update the authenticated caller's profile. The target account comes
/// from the bearer token, not from the request body.
#[utoipa::path(
    patch,
    path = "/api/v1/users",
    tag = "users",
    request_body = AccountPatch,
    responses(
        (status = 200, description = "Profile updated", body = AccountResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_token" = []))
)]
pub async fn update_account(
    State(server): State<UserHubServer>,
    headers: HeaderMap,
    Json(patch): Json<AccountPatch>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let bearer = bearer_from(&headers)?;
    let account = server.identity.update_profile(bearer, patch).await?;
    Ok(Json(api_success(AccountResponse::from(account))))
}
