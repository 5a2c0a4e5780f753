use thiserror::Error;

/// The single error enum shared across UserHub Engine services.
///
/// Variants carry a human-readable message only; structured context travels
/// through tracing fields at the call site, never inside the error itself.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A uniqueness constraint was violated (duplicate email)
    #[error("conflict: {0}")]
    Conflict(String),

    /// A lookup key did not resolve to a record
    #[error("not found: {0}")]
    NotFound(String),

    /// Authentication failed. All credential failures collapse into this
    /// variant with the same message so the response never reveals whether
    /// the email or the password was wrong.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Input failed format validation
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Persistence layer failure
    #[error("database error: {0}")]
    Database(String),

    /// External collaborator failure (directory lookup, etc.)
    #[error("external service error: {0}")]
    External(String),

    /// Wrapped internal errors
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// The one outward-facing authentication failure. Use this for bad
    /// passwords, unknown emails, and denied authorizations alike.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("invalid credentials".to_string())
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::External(message.into())
    }
}

/// Result type alias for UserHub operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Log an error with its originating context
pub fn log_error(context: &str, error: &ServiceError) {
    tracing::error!(
        context = context,
        error = %error,
        "UserHub error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_uniform() {
        let a = ServiceError::invalid_credentials();
        let b = ServiceError::invalid_credentials();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.to_string(), "unauthorized: invalid credentials");
    }

    #[test]
    fn internal_preserves_cause() {
        let cause = anyhow::anyhow!("pool exhausted");
        let err = ServiceError::from(cause);
        assert!(err.to_string().contains("pool exhausted"));
    }
}
