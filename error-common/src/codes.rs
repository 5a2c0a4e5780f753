// Standardized error codes surfaced in API error bodies

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
}

pub mod authentication {
    pub const INVALID_CREDENTIALS: &str = "AUTH_2001";
    pub const TOKEN_EXPIRED: &str = "AUTH_2002";
}

pub mod resource {
    pub const NOT_FOUND: &str = "RESOURCE_3001";
    pub const CONFLICT: &str = "RESOURCE_3002";
}

pub mod database {
    pub const CONNECTION_FAILED: &str = "DB_4001";
    pub const QUERY_FAILED: &str = "DB_4002";
    pub const CONSTRAINT_VIOLATION: &str = "DB_4003";
}

pub mod external {
    pub const UPSTREAM_FAILED: &str = "EXT_5001";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_9001";
}

use crate::types::ServiceError;

/// Structured code for a service error, for API error bodies
pub fn code_of(error: &ServiceError) -> &'static str {
    match error {
        ServiceError::Conflict(_) => resource::CONFLICT,
        ServiceError::NotFound(_) => resource::NOT_FOUND,
        ServiceError::Unauthorized(_) => authentication::INVALID_CREDENTIALS,
        ServiceError::InvalidFormat(_) => validation::INVALID_FORMAT,
        ServiceError::Database(_) => database::QUERY_FAILED,
        ServiceError::External(_) => external::UPSTREAM_FAILED,
        ServiceError::Internal(_) => internal::UNEXPECTED,
    }
}
