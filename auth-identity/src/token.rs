use chrono::{Duration, Utc};
use error_common::{Result, ServiceError};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;

/// Scheme marker prefixed onto every token handed to a caller and stripped
/// from every presented one.
pub const BEARER_PREFIX: &str = "Bearer ";

/// JWT claims carried by a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (the account's email)
    pub sub: String,
    /// Issued at, seconds since epoch
    pub iat: i64,
    /// Expiration, seconds since epoch
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Stateless token port: issue a signed token for a subject and recover the
/// subject from a presented token. Expiry and signature checks live behind
/// `subject_of`; any failure there is an authentication failure.
pub trait TokenCodec: Send + Sync {
    fn issue(&self, subject: &str) -> Result<String>;
    fn subject_of(&self, token: &str) -> Result<String>;
}

/// HS256 JWT implementation of [`TokenCodec`].
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
    issuer: String,
}

impl JwtCodec {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiration: Duration::hours(config.jwt_expiration_hours),
            issuer: config.jwt_issuer.clone(),
        }
    }
}

impl TokenCodec for JwtCodec {
    fn issue(&self, subject: &str) -> Result<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiration).timestamp(),
            iss: self.issuer.clone(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::Internal(anyhow::anyhow!("token signing failed: {e}")))
    }

    fn subject_of(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| ServiceError::Unauthorized("invalid or expired token".to_string()))?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> JwtCodec {
        JwtCodec::new(&IdentityConfig {
            jwt_secret: "test-secret".to_string(),
            ..IdentityConfig::default()
        })
    }

    #[test]
    fn subject_roundtrip() {
        let codec = codec();
        let token = codec.issue("user@example.com").unwrap();
        assert_eq!(codec.subject_of(&token).unwrap(), "user@example.com");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let codec = codec();
        let mut token = codec.issue("user@example.com").unwrap();
        token.push('x');
        assert!(matches!(
            codec.subject_of(&token),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let ours = codec();
        let theirs = JwtCodec::new(&IdentityConfig {
            jwt_secret: "other-secret".to_string(),
            ..IdentityConfig::default()
        });
        let token = theirs.issue("user@example.com").unwrap();
        assert!(ours.subject_of(&token).is_err());
    }
}
