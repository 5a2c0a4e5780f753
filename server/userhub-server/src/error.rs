use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_common::{code_of, ServiceError};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Uniform JSON envelope for successful responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// The payload, when successful
    pub data: Option<T>,
    /// Error message, when failed
    pub error: Option<String>,
}

/// Wrap a payload in the success envelope
pub fn api_success<T>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    }
}

/// Boundary error: a transport status plus the outward message and a
/// structured code. Built from `ServiceError` so handlers just use `?`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: &'static str,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            code: error_common::validation::INVALID_INPUT,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
            code: error_common::authentication::INVALID_CREDENTIALS,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            ServiceError::External(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Database(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            error_common::log_error("api", &err);
        }
        Self {
            status,
            message: err.to_string(),
            code: code_of(&err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message,
            "code": self.code,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let cases = [
            (ServiceError::conflict("dup"), StatusCode::CONFLICT),
            (ServiceError::not_found("gone"), StatusCode::NOT_FOUND),
            (
                ServiceError::invalid_credentials(),
                StatusCode::UNAUTHORIZED,
            ),
            (ServiceError::invalid_format("bad"), StatusCode::BAD_REQUEST),
            (ServiceError::external("down"), StatusCode::BAD_GATEWAY),
            (
                ServiceError::database("broken"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
