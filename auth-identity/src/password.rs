use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_common::{Result, ServiceError};

/// One-way password hashing port. `encode` produces the digest that is the
/// only form ever persisted; `verify` checks a plaintext against a digest.
pub trait PasswordEncoder: Send + Sync {
    fn encode(&self, plaintext: &str) -> Result<String>;
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// Argon2id implementation of [`PasswordEncoder`].
pub struct Argon2Encoder {
    argon2: Argon2<'static>,
}

impl Argon2Encoder {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| ServiceError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?
            .to_string();
        Ok(digest)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            // An unparsable digest is indistinguishable from a bad password
            return false;
        };
        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_never_returns_plaintext() {
        let encoder = Argon2Encoder::new();
        let digest = encoder.encode("hunter2").unwrap();
        assert_ne!(digest, "hunter2");
        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn verify_roundtrip_and_mismatch() {
        let encoder = Argon2Encoder::new();
        let digest = encoder.encode("correct horse").unwrap();
        assert!(encoder.verify("correct horse", &digest));
        assert!(!encoder.verify("wrong horse", &digest));
        assert!(!encoder.verify("correct horse", "not-a-digest"));
    }
}
